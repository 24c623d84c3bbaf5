//! Wire contracts shared between the converter frontend and the conversion backend.

pub mod usecases;
