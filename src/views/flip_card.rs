use std::time::Instant;

use iced::alignment;
use iced::border::Radius;
use iced::widget::canvas::{self, Canvas, Frame, Path, Text};
use iced::{mouse, Color, Element, Font, Pixels, Point, Rectangle, Size, Vector};

use crate::app::Message;
use crate::flip::{FlapSide, FlipDigit};
use crate::util::pad2;

/// Horizontal widening of the flap at 90 degrees, faking perspective.
const PERSPECTIVE: f32 = 0.04;
const SEAM_HEIGHT: f32 = 1.5;

/// Size and appearance of one card. Portrait and landscape differ only here.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CardStyle {
    pub(crate) size: Size,
    pub(crate) font_size: f32,
    pub(crate) corner_radius: f32,
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) seam: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Half {
    Top,
    Bottom,
}

struct FlipCard<'a> {
    digit: &'a FlipDigit,
    now: Instant,
    style: CardStyle,
}

pub(crate) fn flip_card(digit: &FlipDigit, now: Instant, style: CardStyle) -> Element<'_, Message> {
    Canvas::new(FlipCard { digit, now, style })
        .width(style.size.width)
        .height(style.size.height)
        .into()
}

impl<'a> canvas::Program<Message> for FlipCard<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);

        // New value waits on top, old value stays below until the flap lands.
        self.draw_half(&mut frame, bounds.size(), Half::Top, self.digit.incoming());
        self.draw_half(&mut frame, bounds.size(), Half::Bottom, self.digit.displayed());

        if self.digit.is_flipping() {
            let angle = (-self.digit.rotation(self.now)).to_radians();
            let fold = angle.cos().abs();
            let widen = 1.0 + PERSPECTIVE * angle.sin();
            let half = match self.digit.flap_side(self.now) {
                FlapSide::Front => Half::Top,
                FlapSide::Back => Half::Bottom,
            };
            let value = self.digit.flap_value(self.now);

            // Fold around the seam.
            frame.with_save(|frame| {
                frame.translate(Vector::new(center.x, center.y));
                frame.scale_nonuniform(Vector::new(widen, fold));
                frame.translate(Vector::new(-center.x, -center.y));
                self.draw_half(frame, bounds.size(), half, value);
            });
        }

        frame.fill_rectangle(
            Point::new(0.0, center.y - SEAM_HEIGHT / 2.0),
            Size::new(bounds.width, SEAM_HEIGHT),
            self.style.seam,
        );

        vec![frame.into_geometry()]
    }
}

impl FlipCard<'_> {
    fn draw_half(&self, frame: &mut Frame, size: Size, half: Half, value: u32) {
        let r = self.style.corner_radius;
        let half_height = size.height / 2.0;
        let (top, radius) = match half {
            Half::Top => (
                0.0,
                Radius {
                    top_left: r,
                    top_right: r,
                    bottom_right: 0.0,
                    bottom_left: 0.0,
                },
            ),
            Half::Bottom => (
                half_height,
                Radius {
                    top_left: 0.0,
                    top_right: 0.0,
                    bottom_right: r,
                    bottom_left: r,
                },
            ),
        };
        let region = Rectangle::new(Point::new(0.0, top), Size::new(size.width, half_height));

        frame.fill(
            &Path::rounded_rectangle(region.position(), region.size(), radius),
            self.style.background,
        );

        // Glyph is centred on the whole card; the clip keeps one half of it.
        frame.with_clip(region, |frame| {
            frame.fill_text(Text {
                content: pad2(value),
                position: Point::new(size.width / 2.0, half_height - top),
                color: self.style.foreground,
                size: Pixels(self.style.font_size),
                font: Font {
                    weight: iced::font::Weight::Bold,
                    ..Font::MONOSPACE
                },
                align_x: alignment::Horizontal::Center.into(),
                align_y: alignment::Vertical::Center,
                ..Text::default()
            });
        });
    }
}
