use nalgebra::{Isometry3, Matrix3, Point3, UnitQuaternion, Vector3};

pub type Real = f64;

pub type Vec3 = Vector3<Real>;
pub type Pt3 = Point3<Real>;
pub type Mat3 = Matrix3<Real>;
pub type Iso3 = Isometry3<Real>;
pub type UnitQ = UnitQuaternion<Real>;
