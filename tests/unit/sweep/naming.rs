use super::*;

fn cfg(num_parameters: u32, num_steps: u32) -> SweepConfig {
    SweepConfig {
        num_parameters,
        num_steps,
        ..SweepConfig::default()
    }
}

fn tokens(name: &str) -> Vec<String> {
    let body = name
        .strip_prefix("p_")
        .and_then(|s| s.strip_suffix(".png"))
        .expect("name has p_ prefix and .png suffix");
    body.split('_').map(str::to_string).collect()
}

#[test]
fn only_the_swept_token_leaves_the_midpoint() {
    let cfg = cfg(5, 5);
    for dim in 0..cfg.num_parameters {
        for step in 0..cfg.num_steps {
            let toks = tokens(&generate_name(&cfg, dim, step));
            assert_eq!(toks.len(), 5);
            for (i, t) in toks.iter().enumerate() {
                assert!(t.parse::<f64>().is_ok(), "token {t} is numeric");
                if i as u32 != dim {
                    assert_eq!(t, MIDPOINT_TOKEN);
                }
            }
            let expected = format_token(step_value(cfg.num_steps, step));
            assert_eq!(toks[dim as usize], expected);
        }
    }
}

#[test]
fn sweep_endpoints_are_zero_and_one() {
    let cfg = cfg(4, 7);
    for dim in 0..cfg.num_parameters {
        assert_eq!(tokens(&generate_name(&cfg, dim, 0))[dim as usize], "0.00");
        assert_eq!(
            tokens(&generate_name(&cfg, dim, cfg.num_steps - 1))[dim as usize],
            "1.00"
        );
    }
}

#[test]
fn five_step_sweep_uses_quarter_spacing() {
    let cfg = cfg(3, 5);
    assert_eq!(generate_name(&cfg, 1, 0), "p_0.50_0.00_0.50.png");
    assert_eq!(generate_name(&cfg, 1, 1), "p_0.50_0.25_0.50.png");
    assert_eq!(generate_name(&cfg, 1, 3), "p_0.50_0.75_0.50.png");
    assert_eq!(generate_name(&cfg, 1, 4), "p_0.50_1.00_0.50.png");
}

#[test]
fn thirds_round_to_two_decimals() {
    let cfg = cfg(1, 4);
    assert_eq!(generate_name(&cfg, 0, 1), "p_0.33.png");
    assert_eq!(generate_name(&cfg, 0, 2), "p_0.67.png");
}

#[test]
fn single_step_sweep_samples_the_midpoint() {
    let cfg = cfg(2, 1);
    assert_eq!(step_value(1, 0), 0.5);
    assert_eq!(generate_name(&cfg, 0, 0), "p_0.50_0.50.png");
}

#[test]
fn out_of_range_dim_leaves_every_token_at_midpoint() {
    let cfg = cfg(2, 3);
    assert_eq!(generate_name(&cfg, 9, 0), "p_0.50_0.50.png");
}
