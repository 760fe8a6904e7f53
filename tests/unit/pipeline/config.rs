use super::*;

#[test]
fn defaults_match_the_canonical_run() {
    let cfg = SpiralConfig::default();
    assert_eq!(cfg.canvas, Canvas { width: 800, height: 800 });
    assert_eq!(cfg.frame_count, 30);
    assert_eq!(cfg.arm_count, 12);
    assert_eq!(cfg.file_prefix, "unique_psychedelic_fibonacci_spiral");
    assert_eq!(cfg.output_dir, None);
    assert!(cfg.validate().is_ok());
}

#[test]
fn validation_catches_bad_values() {
    let base = SpiralConfig::default();

    let mut cfg = base.clone();
    cfg.canvas.width = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = base.clone();
    cfg.canvas.height = 70_000;
    assert!(cfg.validate().is_err());

    let mut cfg = base.clone();
    cfg.frame_count = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = base.clone();
    cfg.arm_count = 1;
    assert!(cfg.validate().is_err());

    let mut cfg = base.clone();
    cfg.file_prefix = "nested/name".to_string();
    assert!(cfg.validate().is_err());

    let mut cfg = base;
    cfg.file_prefix.clear();
    assert!(cfg.validate().is_err());
}

#[test]
fn output_dir_defaults_to_working_directory() {
    let cfg = SpiralConfig::default();
    assert_eq!(cfg.output_dir().join("a.gif"), PathBuf::from("a.gif"));

    let cfg = cfg.with_output_dir("target/out");
    assert_eq!(
        cfg.output_dir().join("a.gif"),
        PathBuf::from("target/out/a.gif")
    );
}
