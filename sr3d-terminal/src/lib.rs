/// Terminal viewer for the SR3D software rasterizer
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, ClearType},
};
use std::io::{self, stdout, Stdout};
use std::time::{Duration, Instant};
use sr3d_core::{Mesh, PresentationSink, RenderConfig, Renderer};

pub mod input;
pub mod presenter;

pub use input::Command;
pub use presenter::TerminalPresenter;

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    mesh: Mesh,
    renderer: Renderer,
    presenter: TerminalPresenter<Stdout>,
    running: bool,
    target_frame_time: Duration,
    last_fps_sample: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh, config: RenderConfig, target_fps: u32) -> anyhow::Result<Self> {
        let (columns, rows) = terminal::size()?;
        let renderer = Renderer::new(config)?;

        if !renderer.fits(&mesh) {
            log::warn!(
                "camera_z_offset {} does not clear mesh radius {:.3}; triangles crossing the camera plane will be skipped",
                renderer.config().camera_z_offset,
                mesh.bounding_radius()
            );
        }

        Ok(Self {
            mesh,
            renderer,
            presenter: TerminalPresenter::new(stdout(), columns as usize, rows as usize),
            running: true,
            target_frame_time: Duration::from_secs(1) / target_fps.max(1),
            last_fps_sample: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::ZERO)? {
                self.handle_event(event::read()?);
            }

            self.renderer.update(&self.mesh);
            let status = self.status_line();
            self.presenter.set_status(status);
            let frame = self.renderer.render();
            self.presenter.present(frame)?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.target_frame_time {
                std::thread::sleep(self.target_frame_time - elapsed);
            }

            let since = self.last_fps_sample.elapsed();
            if since >= Duration::from_secs(1) {
                self.fps = self.frame_count as f32 / since.as_secs_f32();
                self.frame_count = 0;
                self.last_fps_sample = Instant::now();
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                if let Some(command) = Command::from_key(code) {
                    self.running = command.apply(&mut self.renderer);
                }
            }
            Event::Resize(columns, rows) => {
                self.presenter.resize(columns as usize, rows as usize);
            }
            _ => {}
        }
    }

    fn status_line(&self) -> String {
        let stats = self.renderer.stats();
        format!(
            "SR3D | FPS: {:.1} | {}/{} triangles | cull: {} | C=Cull F=Fill L=Lines V=Verts G=Grid WASD/ER=Rotate Q=Quit",
            self.fps,
            stats.projected,
            stats.faces,
            if self.renderer.culling() { "on" } else { "off" },
        )
    }
}
