//! DTO <-> domain conversions for the REST layer.

pub mod attendance_mapper;
pub mod employee_mapper;
