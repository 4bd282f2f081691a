use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, row};
use iced::{Background, Color, Element, Length, Size};

use crate::app::{Message, TimerApp};
use crate::clock::Field;
use crate::views::flip_card::{flip_card, CardStyle};

impl TimerApp {
    /// Digits only, larger, centred on black.
    pub(crate) fn view_landscape(&self) -> Element<'_, Message> {
        let style = CardStyle {
            size: Size::new(120.0, 160.0),
            font_size: 80.0,
            corner_radius: 20.0,
            foreground: self.colors.card_fg,
            background: self.colors.card_bg,
            seam: self.colors.card_seam,
        };

        let mut cards = row![].spacing(20).align_y(Vertical::Center);
        for field in Field::ALL {
            cards = cards.push(flip_card(self.home.face().digit(field), self.now, style));
        }

        container(cards)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(|_theme: &iced::Theme| container::Style {
                background: Some(Background::Color(Color::BLACK)),
                ..Default::default()
            })
            .into()
    }
}
