use std::convert::Infallible;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

/// Ordered task mapping. Iteration order is insertion order, which fixes
/// the order peak tables are concatenated in.
pub type TaskMap = IndexMap<String, TaskDescriptor>;

#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
pub enum Strand {
    /// Forward strand.
    Forward,
    /// Reverse strand.
    Reverse,
    /// No strand.
    None,
}

impl FromStr for Strand {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            _ => Ok(Strand::None),
        }
    }
}

impl Display for Strand {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
            Strand::None => write!(f, "."),
        }
    }
}

impl Serialize for Strand {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Strand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// One strand/modality of an experimental assay.
///
/// Only `peaks` is consumed by the position selectors; `signal` and
/// `control` are handles for the downstream windowing step. Two
/// descriptors of a stranded assay typically point at the same peak file,
/// which is why [`crate::positions::peak_positions`] offers duplicate
/// removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    /// Path to the task's narrowPeak calls.
    pub peaks:   PathBuf,
    #[serde(default)]
    pub task_id: Option<u32>,
    #[serde(default)]
    pub strand:  Option<Strand>,
    #[serde(default)]
    pub signal:  Option<PathBuf>,
    #[serde(default)]
    pub control: Option<PathBuf>,
}

impl TaskDescriptor {
    pub fn new<P: Into<PathBuf>>(peaks: P) -> Self {
        Self {
            peaks:   peaks.into(),
            task_id: None,
            strand:  None,
            signal:  None,
            control: None,
        }
    }

    pub fn with_task_id(
        mut self,
        task_id: u32,
    ) -> Self {
        self.task_id = Some(task_id);
        self
    }

    pub fn with_strand(
        mut self,
        strand: Strand,
    ) -> Self {
        self.strand = Some(strand);
        self
    }

    pub fn with_signal<P: Into<PathBuf>>(
        mut self,
        signal: P,
    ) -> Self {
        self.signal = Some(signal.into());
        self
    }

    pub fn with_control<P: Into<PathBuf>>(
        mut self,
        control: P,
    ) -> Self {
        self.control = Some(control.into());
        self
    }
}
