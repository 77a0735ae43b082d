use std::fs::{self, File};
use std::path::Path;

use crate::donors::Percentile;
use crate::{ClientError, ClientResult};

pub(crate) fn read_percentile(path: &Path) -> ClientResult<Percentile> {
    let body = fs::read_to_string(path)
        .map_err(|error| ClientError::percentile_unreadable(path, &error.to_string()))?;
    body.parse::<Percentile>()
        .map_err(|_| ClientError::percentile_invalid(path, body.trim()))
}

pub(crate) fn open_input(path: &Path) -> ClientResult<File> {
    File::open(path).map_err(|error| ClientError::input_unreadable(path, &error.to_string()))
}

/// Creates or truncates the output so every run starts from an empty file.
pub(crate) fn reset_output(path: &Path) -> ClientResult<File> {
    File::create(path).map_err(|error| ClientError::output_unwritable(path, &error.to_string()))
}
