use macroquad::prelude::*;

/// Which control a button triggers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Run,
    Pause,
    Reset,
}

/// Button UI component with hover and click detection
#[derive(Clone, Debug)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: &'static str,
    action: ButtonAction,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: &'static str, action: ButtonAction) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text,
            action,
            color: Color::from_rgba(0, 0, 128, 255),
            hover_color: Color::from_rgba(30, 30, 170, 255),
        }
    }

    pub const fn action(&self) -> ButtonAction {
        self.action
    }

    /// `(x, y, width, height)` in screen pixels
    pub const fn rect(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Check if a point lies on the button
    pub fn contains(&self, pos: (f32, f32)) -> bool {
        pos.0 >= self.x
            && pos.0 <= self.x + self.width
            && pos.1 >= self.y
            && pos.1 <= self.y + self.height
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32), font_size: u16) {
        let color = if self.contains(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);

        let text_size = measure_text(self.text, None, font_size, 1.0);
        draw_text(
            self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            f32::from(font_size),
            WHITE,
        );
    }

    /// Check if the button was released on this frame (click completes on mouse-up)
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_released(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let b = Button::new(10.0, 20.0, 100.0, 30.0, "Run", ButtonAction::Run);
        assert!(b.contains((10.0, 20.0)));
        assert!(b.contains((110.0, 50.0)));
        assert!(b.contains((60.0, 35.0)));
        assert!(!b.contains((9.9, 35.0)));
        assert!(!b.contains((60.0, 50.1)));
        assert_eq!(b.action(), ButtonAction::Run);
    }
}
