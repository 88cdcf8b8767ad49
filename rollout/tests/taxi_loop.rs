use anyhow::Result;
use rollout::{run, Args, RunConfig};
use rollout_core::{
    error::RolloutError,
    record::{BufferedRecorder, NullRecorder},
    Driver, DriverConfig, Env as _,
};
use rollout_taxi_env::{RenderMode, TaxiEnv, TaxiEnvConfig};
use tempdir::TempDir;

fn ansi() -> TaxiEnvConfig {
    TaxiEnvConfig::default().render_mode(Some(RenderMode::Ansi))
}

#[test]
fn test_taxi_episode_ends_within_time_limit() -> Result<()> {
    let driver = Driver::new(DriverConfig::default());
    for seed in 0..20 {
        let mut env = TaxiEnv::build(&ansi(), seed)?;
        let mut recorder = BufferedRecorder::new();
        let summary = driver.run(&mut env, &mut recorder)?;

        // the 200 step time limit always ends the episode before the budget
        assert!(summary.is_done());
        assert!(summary.steps <= 200);
        assert_eq!(summary.renders, summary.steps + 1);
        assert_eq!(recorder.len(), summary.steps + 1);
        if !summary.terminated {
            assert_eq!(summary.steps, 200);
        }

        let frames = env.take_frames();
        assert_eq!(frames.len(), summary.renders);
        assert!(frames[0].ends_with("+---------+\n\n"));
        assert!(frames[1..].iter().all(|f| f.ends_with(")\n")));
    }
    Ok(())
}

#[test]
fn test_taxi_without_time_limit_respects_budget() -> Result<()> {
    let driver = Driver::new(DriverConfig::default().max_steps(1000));
    for seed in 0..10 {
        let config = ansi().max_episode_steps(None);
        let mut env = TaxiEnv::build(&config, seed)?;
        let summary = driver.run(&mut env, &mut NullRecorder {})?;

        assert!(summary.steps <= 1000);
        assert!(!summary.truncated);
        if summary.terminated {
            assert_eq!(summary.renders, summary.steps + 1);
        } else {
            assert_eq!(summary.steps, 1000);
            assert_eq!(summary.renders, 1000);
        }
    }
    Ok(())
}

#[test]
fn test_unknown_env_fails_before_running() {
    let args = Args {
        env: Some("Taxi-v9".to_string()),
        seed: Some(0),
        ..Default::default()
    };
    let err = run(&args).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RolloutError>(),
        Some(RolloutError::VersionNotFound { .. })
    ));

    let args = Args {
        env: Some("CliffWalking-v0".to_string()),
        ..Default::default()
    };
    let err = run(&args).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RolloutError>(),
        Some(RolloutError::UnknownEnv(_))
    ));
}

#[test]
fn test_run_from_config_file() -> Result<()> {
    let dir = TempDir::new("run_config")?;
    let path = dir.path().join("run.yaml");
    let mut config = RunConfig::default();
    config.env = ansi().max_episode_steps(Some(30));
    config.driver = DriverConfig::default().max_steps(20);
    config.save(&path)?;
    assert_eq!(RunConfig::load(&path)?, config);

    let args = Args {
        seed: Some(5),
        config: Some(path.clone()),
        ..Default::default()
    };
    let summary = run(&args)?;
    assert!(summary.steps <= 20);
    if summary.is_done() {
        assert_eq!(summary.renders, summary.steps + 1);
    } else {
        assert_eq!(summary.renders, 20);
    }

    // flags take precedence over the file
    let args = Args {
        max_steps: Some(3),
        ..args
    };
    let summary = run(&args)?;
    assert!(summary.steps <= 3);
    Ok(())
}

#[test]
fn test_same_seed_same_episode() -> Result<()> {
    let args = || Args {
        seed: Some(1234),
        config: None,
        ..Default::default()
    };
    let dir = TempDir::new("same_seed")?;
    let path = dir.path().join("run.yaml");
    let mut config = RunConfig::default();
    config.env = ansi();
    config.save(&path)?;

    let a = run(&Args {
        config: Some(path.clone()),
        ..args()
    })?;
    let b = run(&Args {
        config: Some(path),
        ..args()
    })?;
    assert_eq!(a.steps, b.steps);
    assert_eq!(a.total_reward, b.total_reward);
    assert_eq!(a.terminated, b.terminated);
    Ok(())
}
