/// SR3D Terminal Viewer - rotating mesh rendered on the CPU
///
/// Controls:
///   - WASD / Arrow Keys: Rotate the mesh
///   - E/R: Roll rotation
///   - C: Toggle back-face culling
///   - F / L / V / G: Toggle fill, wireframe lines, vertices, grid
///   - Q/ESC: Quit
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use sr3d_core::{obj, Mesh, RenderConfig};
use sr3d_terminal::TerminalApp;

#[derive(Parser, Debug)]
#[command(name = "sr3d", about = "Software 3D rasterizer in the terminal")]
struct Args {
    /// Wavefront OBJ mesh to show (defaults to a cube)
    #[arg(short, long)]
    mesh: Option<PathBuf>,

    /// TOML render configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with back-face culling disabled
    #[arg(long)]
    no_cull: bool,

    /// Frame rate cap
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RenderConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if args.no_cull {
        config.cull_backfaces = false;
    }

    let mesh = match &args.mesh {
        Some(path) => obj::load_obj(path)
            .with_context(|| format!("Failed to load mesh {}", path.display()))?,
        None => Mesh::cube(2.0),
    };
    log::info!(
        "Rendering {} faces at {}x{}",
        mesh.faces().len(),
        config.width,
        config.height
    );

    let mut app = TerminalApp::new(mesh, config, args.fps)?;
    app.run()?;
    Ok(())
}
