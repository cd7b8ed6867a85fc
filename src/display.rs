use std::path::{Path, PathBuf};

use thousands::Separable;

use crate::model::prices::Price;

pub trait Display {
    fn to_display(&self) -> String;
}

impl Display for Price {
    fn to_display(&self) -> String {
        format!("{}.{:02}", self.units().separate_with_commas(), self.fraction())
    }
}

impl Display for PathBuf {
    fn to_display(&self) -> String {
        self.to_str()
            .unwrap_or("Path with invalid(s) character(s)")
            .to_string()
    }
}

impl Display for &Path {
    fn to_display(&self) -> String {
        self.to_str()
            .unwrap_or("Path with invalid(s) character(s)")
            .to_string()
    }
}
