use iced::alignment::{Horizontal, Vertical};
use iced::widget::{column, container, mouse_area, row, text};
use iced::{mouse, Color, Element, Length};

use crate::app::{Message, TimerApp};
use crate::clock::Field;
use crate::theme::ThemeColors;
use crate::picker::wheel_value;
use crate::util::scroll_step;

const WHEEL_WIDTH: f32 = 44.0;
const NEIGHBOUR_ALPHA: f32 = 0.35;
/// Clickable values shown on each side of the selection.
const WHEEL_REACH: i32 = 2;

impl TimerApp {
    /// Three wheel-like columns on a rounded band. Handlers are only
    /// attached while the countdown is idle.
    pub(crate) fn view_picker(&self, colors: &ThemeColors, editable: bool) -> Element<'_, Message> {
        let mut wheels = row![].align_y(Vertical::Center);
        for field in Field::ALL {
            wheels = wheels.push(
                container(self.view_wheel(field, colors, editable))
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            );
        }

        container(wheels)
            .padding([6, 10])
            .width(Length::Fill)
            .style(colors.picker_band_style())
            .into()
    }

    fn view_wheel(&self, field: Field, colors: &ThemeColors, editable: bool) -> Element<'_, Message> {
        let value = self.home.picker().displayed(field, self.now);
        let small = colors.picker_text_size * 0.75;

        let mut wheel = column![];
        for offset in -WHEEL_REACH..=WHEEL_REACH {
            if offset == 0 {
                wheel = wheel.push(
                    text(value.to_string())
                        .size(colors.picker_text_size)
                        .color(colors.picker_text),
                );
                continue;
            }
            let faded = Color {
                a: colors.picker_text.a * NEIGHBOUR_ALPHA / offset.unsigned_abs() as f32,
                ..colors.picker_text
            };
            wheel = wheel.push(neighbour(
                field,
                wheel_value(field, value, offset),
                small,
                faded,
                editable,
            ));
        }
        let wheel = wheel.width(WHEEL_WIDTH).align_x(Horizontal::Center);

        let body = row![
            wheel,
            text(field.label())
                .size(colors.label_text)
                .color(colors.picker_text),
        ]
        .spacing(6)
        .align_y(Vertical::Center);

        if editable {
            mouse_area(body)
                .on_scroll(move |delta| Message::PickerStep(field, scroll_step(delta)))
                .into()
        } else {
            body.into()
        }
    }
}

/// Faded value shown above or below the selection. Clicking it selects
/// that value.
fn neighbour(
    field: Field,
    value: Option<u32>,
    size: f32,
    color: Color,
    editable: bool,
) -> Element<'static, Message> {
    let label = text(value.map(|v| v.to_string()).unwrap_or_default())
        .size(size)
        .color(color);
    match value {
        Some(v) if editable => mouse_area(label)
            .on_press(Message::PickerSet(field, v))
            .interaction(mouse::Interaction::Pointer)
            .into(),
        _ => label.into(),
    }
}
