mod sample_scene;
mod sum_radii;

pub use sample_scene::{CurveSample, SampleScene};
pub use sum_radii::{CircleRadii, SumCircleRadii};
