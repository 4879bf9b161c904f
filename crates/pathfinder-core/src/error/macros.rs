//! Error macros for pathfinder

/// Macro for returning an invalid input error
#[macro_export]
macro_rules! bail_invalid {
    ($($arg:tt)*) => {
        return Err($crate::error::PathfinderError::InvalidInput(format!($($arg)*)))
    };
}

/// Macro for mapping database errors
#[macro_export]
macro_rules! map_db_err {
    ($op:expr, $error:expr) => {
        $crate::error::PathfinderError::db_operation($op, $error)
    };
}
