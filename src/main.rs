use std::f64::consts::FRAC_PI_4;

use curvis::operations::creation::GenerateScene;
use curvis::operations::query::{SampleScene, SumCircleRadii};
use curvis::scene::{CurveKind, Scene};

/// Number of curves in the generated scene.
const SCENE_SIZE: usize = 10;

fn main() -> curvis::Result<()> {
    // Default: WARN for everything, INFO for curvis.
    // Override with RUST_LOG env var (e.g. RUST_LOG=curvis=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("curvis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut rng = rand::thread_rng();
    let mut scene = Scene::new();
    GenerateScene::new(SCENE_SIZE).execute(&mut scene, &mut rng);

    let circles = scene
        .iter()
        .filter(|(_, curve)| curve.kind() == CurveKind::Circle)
        .count();
    tracing::info!(curves = scene.len(), circles, "scene generated");

    for sample in SampleScene::new(FRAC_PI_4).execute(&scene)? {
        println!("{sample}");
    }

    let radii = SumCircleRadii::new().execute(&scene)?;
    println!("Total sum of radii: {}", radii.total);

    Ok(())
}
