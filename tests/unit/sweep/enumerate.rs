use super::*;

#[test]
fn key_and_length_follow_dimension_and_step_count() {
    let cfg = SweepConfig::default();
    for dim in 0..cfg.num_parameters {
        let sweep = generate_key_and_files(&cfg, dim);
        assert_eq!(sweep.key, format!("p{dim}"));
        assert_eq!(sweep.len(), cfg.num_steps as usize);
    }
}

#[test]
fn files_are_ordered_by_step_and_unique() {
    let cfg = SweepConfig {
        num_parameters: 2,
        num_steps: 3,
        ..SweepConfig::default()
    };
    let sweep = generate_key_and_files(&cfg, 0);
    assert_eq!(
        sweep.files,
        vec!["p_0.00_0.50.png", "p_0.50_0.50.png", "p_1.00_0.50.png"]
    );

    let mut dedup = sweep.files.clone();
    dedup.sort();
    dedup.dedup();
    assert_eq!(dedup.len(), sweep.len());
}

#[test]
fn enumerate_covers_every_dimension_in_order() {
    let cfg = SweepConfig {
        num_parameters: 3,
        num_steps: 2,
        ..SweepConfig::default()
    };
    let keys: Vec<_> = enumerate_sweeps(&cfg).into_iter().map(|s| s.key).collect();
    assert_eq!(keys, vec!["p0", "p1", "p2"]);
}

#[test]
fn zero_steps_yields_empty_sweep() {
    let cfg = SweepConfig {
        num_steps: 0,
        ..SweepConfig::default()
    };
    assert!(generate_key_and_files(&cfg, 0).is_empty());
}
