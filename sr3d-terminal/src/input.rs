/// Keyboard controls for the terminal viewer
use crossterm::event::KeyCode;
use sr3d_core::Renderer;

/// Radians per key press
const NUDGE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Quit,
    ToggleCulling,
    ToggleFill,
    ToggleWireframe,
    ToggleVertices,
    ToggleGrid,
    Rotate(f32, f32, f32),
}

impl Command {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        let command = match code {
            KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
            KeyCode::Char('c') => Command::ToggleCulling,
            KeyCode::Char('f') => Command::ToggleFill,
            KeyCode::Char('l') => Command::ToggleWireframe,
            KeyCode::Char('v') => Command::ToggleVertices,
            KeyCode::Char('g') => Command::ToggleGrid,
            KeyCode::Char('w') | KeyCode::Up => Command::Rotate(NUDGE, 0.0, 0.0),
            KeyCode::Char('s') | KeyCode::Down => Command::Rotate(-NUDGE, 0.0, 0.0),
            KeyCode::Char('a') | KeyCode::Left => Command::Rotate(0.0, -NUDGE, 0.0),
            KeyCode::Char('d') | KeyCode::Right => Command::Rotate(0.0, NUDGE, 0.0),
            KeyCode::Char('e') => Command::Rotate(0.0, 0.0, NUDGE),
            KeyCode::Char('r') => Command::Rotate(0.0, 0.0, -NUDGE),
            _ => return None,
        };
        Some(command)
    }

    /// Apply to the renderer; returns `false` once the viewer should stop
    pub fn apply(self, renderer: &mut Renderer) -> bool {
        match self {
            Command::Quit => return false,
            Command::ToggleCulling => {
                let enabled = renderer.toggle_culling();
                log::debug!("back-face culling {}", if enabled { "on" } else { "off" });
            }
            Command::ToggleFill => toggle(&mut renderer.draw_options_mut().fill),
            Command::ToggleWireframe => toggle(&mut renderer.draw_options_mut().wireframe),
            Command::ToggleVertices => toggle(&mut renderer.draw_options_mut().vertices),
            Command::ToggleGrid => toggle(&mut renderer.draw_options_mut().grid),
            Command::Rotate(dx, dy, dz) => renderer.rotate_by(dx, dy, dz),
        }
        true
    }
}

fn toggle(flag: &mut bool) {
    *flag = !*flag;
}
