use super::Number;
use crate::quantities::{Displacement, Frequency, Length, Speed, Time, Velocity};

relations! {
    Speed * Time = Length;
    Length / Time = Speed;
    Length / Speed = Time;
    Velocity * Time = Displacement;
    Displacement / Time = Velocity;
    Length * Frequency = Speed;
    Speed / Length = Frequency;
    Time * Frequency = Number;
}
