use crate::{config::SweepConfig, sweep::naming::generate_name};

/// One dimension's sweep: its key and the screenshots in left-to-right order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sweep {
    /// `p<dim>`, also the stem of the canvas and final artifacts.
    pub key: String,
    /// Source filenames ordered by ascending step.
    pub files: Vec<String>,
}

impl Sweep {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

pub fn generate_key_and_files(cfg: &SweepConfig, target_dim: u32) -> Sweep {
    let files = (0..cfg.num_steps)
        .map(|step| generate_name(cfg, target_dim, step))
        .collect();
    Sweep {
        key: format!("p{target_dim}"),
        files,
    }
}

/// Every sweep of the parameter space, in ascending dimension order.
pub fn enumerate_sweeps(cfg: &SweepConfig) -> Vec<Sweep> {
    (0..cfg.num_parameters)
        .map(|dim| generate_key_and_files(cfg, dim))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/sweep/enumerate.rs"]
mod tests;
