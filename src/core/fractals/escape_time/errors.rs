use crate::core::data::complex::Complex;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EscapeTimeError {
    NonFinitePoint { point: Complex },
}

impl fmt::Display for EscapeTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinitePoint { point } => {
                write!(
                    f,
                    "cannot iterate from non-finite point ({}, {})",
                    point.real, point.imag
                )
            }
        }
    }
}

impl Error for EscapeTimeError {}
