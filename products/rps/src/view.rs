use crate::Canvas;
use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_9X18, FONT_10X20},
    },
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

pub const WINDOW_WIDTH: usize = 640;
pub const WINDOW_HEIGHT: usize = 480;
pub const PREVIEW_WIDTH: usize = 320;
pub const PREVIEW_HEIGHT: usize = 240;

const PREVIEW_X: i32 = (WINDOW_WIDTH - PREVIEW_WIDTH) as i32 / 2;
const PREVIEW_Y: i32 = 10;
const CENTER_X: i32 = WINDOW_WIDTH as i32 / 2;
const RESULT_Y: i32 = 262;
const OPPONENT_Y: i32 = 308;
const SCORE_Y: i32 = 338;
const STATUS_Y: i32 = 432;

const BACKGROUND: Rgb888 = Rgb888::new(32, 32, 40);
const FOREGROUND: Rgb888 = Rgb888::new(235, 235, 235);
const ACCENT: Rgb888 = Rgb888::new(250, 200, 80);
const ERROR: Rgb888 = Rgb888::new(240, 90, 80);
const PREVIEW_EMPTY: Rgb888 = Rgb888::new(0, 0, 0);
const BUTTON_FILL: Rgb888 = Rgb888::new(60, 130, 200);
const BUTTON_PRESSED: Rgb888 = Rgb888::new(40, 90, 150);
const BUTTON_DISABLED: Rgb888 = Rgb888::new(90, 90, 90);

/// How the Play button should look this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Ready,
    Pressed,
    Disabled,
}

/// Clickable rectangle with a centred label.
#[derive(Debug, Clone)]
pub struct Button {
    rect: Rectangle,
    label: &'static str,
}

impl Button {
    pub fn new(x: i32, y: i32, width: u32, height: u32, label: &'static str) -> Self {
        Self {
            rect: Rectangle::new(Point::new(x, y), Size::new(width, height)),
            label,
        }
    }

    /// The Play button below the score line.
    pub fn play() -> Self {
        Self::new(CENTER_X - 50, 370, 100, 44, "Play")
    }

    /// Whether a mouse position in window coordinates hits the button.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        if x < 0.0 || y < 0.0 {
            return false;
        }
        self.rect.contains(Point::new(x as i32, y as i32))
    }

    pub fn label(&self) -> &str {
        self.label
    }

    fn draw(&self, canvas: &mut Canvas, state: ButtonState) {
        let fill = match state {
            ButtonState::Ready => BUTTON_FILL,
            ButtonState::Pressed => BUTTON_PRESSED,
            ButtonState::Disabled => BUTTON_DISABLED,
        };
        let style = PrimitiveStyleBuilder::new()
            .fill_color(fill)
            .stroke_color(FOREGROUND)
            .stroke_width(2)
            .build();
        match self.rect.into_styled(style).draw(canvas) {
            Ok(()) => {}
            Err(infallible) => match infallible {},
        }
        draw_text(
            canvas,
            self.label,
            self.rect.center(),
            &FONT_10X20,
            FOREGROUND,
            Baseline::Middle,
        );
    }
}

/// Everything that ends up on screen for one frame.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    /// Packed preview pixels, `PREVIEW_WIDTH`×`PREVIEW_HEIGHT`, if a frame has arrived yet.
    pub preview: Option<&'a [u32]>,
    pub result: &'a str,
    pub opponent: &'a str,
    pub score: &'a str,
    pub status: Option<&'a str>,
    pub button: ButtonState,
}

/// Draw a full frame of the game window.
pub fn render(canvas: &mut Canvas, button: &Button, view: &View<'_>) {
    match canvas.clear(BACKGROUND) {
        Ok(()) => {}
        Err(infallible) => match infallible {},
    }

    match view.preview {
        Some(pixels) => canvas.blit(pixels, PREVIEW_WIDTH, PREVIEW_HEIGHT, PREVIEW_X, PREVIEW_Y),
        None => {
            let placeholder = Rectangle::new(
                Point::new(PREVIEW_X, PREVIEW_Y),
                Size::new(PREVIEW_WIDTH as u32, PREVIEW_HEIGHT as u32),
            );
            match canvas.fill_solid(&placeholder, PREVIEW_EMPTY) {
                Ok(()) => {}
                Err(infallible) => match infallible {},
            }
        }
    }

    let top = |y| Point::new(CENTER_X, y);
    draw_text(canvas, view.result, top(RESULT_Y), &FONT_10X20, FOREGROUND, Baseline::Top);
    draw_text(canvas, view.opponent, top(OPPONENT_Y), &FONT_10X20, ACCENT, Baseline::Top);
    draw_text(canvas, view.score, top(SCORE_Y), &FONT_9X18, FOREGROUND, Baseline::Top);
    button.draw(canvas, view.button);
    if let Some(status) = view.status {
        draw_text(canvas, status, top(STATUS_Y), &FONT_6X10, ERROR, Baseline::Top);
    }
}

fn draw_text(
    canvas: &mut Canvas,
    text: &str,
    position: Point,
    font: &MonoFont<'_>,
    color: Rgb888,
    baseline: Baseline,
) {
    if text.is_empty() {
        return;
    }
    let character_style = MonoTextStyle::new(font, color);
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(baseline)
        .build();
    match Text::with_text_style(text, position, character_style, text_style).draw(canvas) {
        Ok(_) => {}
        Err(infallible) => match infallible {},
    }
}
