use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, row, space, text};
use iced::{Background, Border, Element, Length, Size};

use crate::app::{Message, TimerApp};
use crate::clock::Field;
use crate::theme::ThemeColors;
use crate::views::flip_card::{flip_card, CardStyle};

const TITLE: &str = "Flip Timer";
const SCREEN_PADDING: u16 = 15;
const DOT_SIZE: f32 = 10.0;

fn portrait_card(colors: &ThemeColors) -> CardStyle {
    CardStyle {
        size: Size::new(100.0, 120.0),
        font_size: 60.0,
        corner_radius: 18.0,
        foreground: colors.card_fg,
        background: colors.card_bg,
        seam: colors.card_seam,
    }
}

impl TimerApp {
    pub(crate) fn view_home(&self) -> Element<'_, Message> {
        let colors = &self.colors;
        let editable = self.home.is_editable();
        let input_colors = colors.with_opacity(self.home.input_opacity(self.now));

        let title = text(TITLE)
            .size(colors.title_text)
            .color(colors.title)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            });

        let content = column![
            title,
            container(self.view_clock_face(colors)).padding(iced::padding::top(20)),
            self.view_picker(&input_colors, editable),
            self.view_toggle_button(colors),
            self.view_recents(&input_colors, editable),
        ]
        .spacing(20)
        .width(Length::Fill);

        container(content)
            .padding(SCREEN_PADDING)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(colors.background_style())
            .into()
    }

    /// Hours : minutes : seconds, each card captioned.
    fn view_clock_face(&self, colors: &ThemeColors) -> Element<'_, Message> {
        let style = portrait_card(colors);
        let mut face = row![].spacing(10).align_y(Vertical::Center);

        for (i, field) in Field::ALL.into_iter().enumerate() {
            let card = column![
                flip_card(self.home.face().digit(field), self.now, style),
                text(field.label()).size(colors.label_text).color(colors.label),
            ]
            .spacing(10)
            .align_x(Horizontal::Center);
            face = face.push(card);

            if i + 1 < Field::ALL.len() {
                face = face.push(
                    container(column![dot(colors), dot(colors)].spacing(15))
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                );
            }
        }

        container(face)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    }

    fn view_toggle_button(&self, colors: &ThemeColors) -> Element<'_, Message> {
        let enabled = self.home.can_toggle();
        let colors = colors.with_opacity(self.home.button_opacity(self.now));
        let label = if self.home.is_running() { "Reset" } else { "Start" };

        button(
            text(label)
                .size(16)
                .color(colors.button_fg)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .on_press_maybe(enabled.then_some(Message::ToggleCountdown))
        .padding([12, 0])
        .width(Length::Fill)
        .style(colors.button_style())
        .into()
    }
}

fn dot(colors: &ThemeColors) -> Element<'static, Message> {
    let color = colors.separator;
    container(space::Space::new().width(DOT_SIZE).height(DOT_SIZE))
        .style(move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: (DOT_SIZE / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
