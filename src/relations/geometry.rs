use crate::quantities::{Area, Length, ScalarStrain};

relations! {
    Length ^ 2 = Area;
    Area / Length = Length;
    ScalarStrain * Length = Length;
}
