//! Color picking demo.
//!
//! Builds a small model (a textured panel inside nested instances next to a
//! flat, translucent panel) and sweeps a pointer across the view, printing
//! what the HUD would show. Run with `RUST_LOG=debug` to see why positions
//! without a pick were rejected.

use std::sync::Arc;

use colorpick::*;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;

/// 8x8 checkerboard of two palette colors.
fn checkerboard() -> Result<Arc<Texture>> {
    let dark = Color::rgb(25, 25, 112); // MidnightBlue
    let light = Color::rgb(255, 215, 0); // Gold
    let pixels = (0..64)
        .map(|i| if (i / 8 + i % 8) % 2 == 0 { dark } else { light })
        .collect();
    Ok(Arc::new(Texture::new("checkerboard", ImageRep::new(8, 8, pixels)?)))
}

fn panel(x0: f32, x1: f32) -> SceneFace {
    SceneFace::new(vec![
        Vec3::new(x0, -1.0, 0.0),
        Vec3::new(x1, -1.0, 0.0),
        Vec3::new(x1, 1.0, 0.0),
        Vec3::new(x0, 1.0, 0.0),
    ])
}

fn build_model() -> Result<Model> {
    let textured = panel(-1.0, 1.0)
        .with_uv(UvProjection::planar(
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        ))
        .with_material(Material::textured(Color::WHITE, 1.0, checkerboard()?));

    let turned = ComponentInstance::new("turned", Mat4::from_rotation_y(0.3)).with(textured);
    let group = ComponentInstance::new("group", Mat4::from_translation(Vec3::new(-1.2, 0.0, 0.0)))
        .with(turned);

    // Stored color alpha is junk; the material opacity wins.
    let glass = panel(0.4, 2.4).with_material(Material::flat(Color::new(70, 130, 180, 0), 0.5));

    Ok(Model::new().with(group).with(glass))
}

#[allow(clippy::cast_precision_loss)]
fn main() -> Result<()> {
    init_logging();

    let options = PickOptions::default();
    log::info!("pick options: {}", options.to_json()?);

    let camera = Camera::default().looking_at(Vec3::new(0.0, 0.0, 6.0), Vec3::ZERO);
    let view = SceneView::new(camera, WIDTH, HEIGHT, build_model()?);
    let mut tool = ColorPickerTool::new(options);
    tool.activate();

    let y = HEIGHT as f32 / 2.0;
    for step in 0..=16 {
        let x = WIDTH as f32 * step as f32 / 16.0;
        tool.on_mouse_move(x, y, &view);
        match tool.hud_text() {
            Some(text) => {
                let name = text.name.unwrap_or_default();
                let uv = text.uv.unwrap_or_default();
                println!("({x:>5.1}, {y:>5.1})  {}  {name}  {uv}", text.rgba);
            }
            None => println!("({x:>5.1}, {y:>5.1})  -"),
        }
    }

    tool.deactivate();
    Ok(())
}
