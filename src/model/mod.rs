//! Entity and value-object types shared by every subsystem.

mod entities;

pub use entities::{
    Consultant, Inquiry, Project, Rate, RateType, TargetType, WorkStyle,
};
