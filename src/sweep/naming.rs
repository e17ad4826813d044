use crate::config::SweepConfig;

/// Token used for every dimension that is not being swept.
pub const MIDPOINT_TOKEN: &str = "0.50";

/// Value of `step` along a dimension sampled at `num_steps` points over `[0, 1]`.
///
/// A single-step sweep has no spacing to divide by; it samples the midpoint.
pub fn step_value(num_steps: u32, step: u32) -> f64 {
    if num_steps <= 1 {
        return 0.5;
    }
    f64::from(step) * (1.0 / (f64::from(num_steps) - 1.0))
}

pub fn format_token(value: f64) -> String {
    format!("{value:.2}")
}

/// Filename of the screenshot for `step` along `target_dim`, all other dimensions at the midpoint.
///
/// `p_0.00_0.50_0.50.png` is step 0 of dimension 0 in a three-parameter space.
pub fn generate_name(cfg: &SweepConfig, target_dim: u32, step: u32) -> String {
    let mut name = String::from("p");
    for dim in 0..cfg.num_parameters {
        name.push('_');
        if dim == target_dim {
            name.push_str(&format_token(step_value(cfg.num_steps, step)));
        } else {
            name.push_str(MIDPOINT_TOKEN);
        }
    }
    name.push_str(".png");
    name
}

#[cfg(test)]
#[path = "../../tests/unit/sweep/naming.rs"]
mod tests;
