mod generate_scene;

pub use generate_scene::GenerateScene;
