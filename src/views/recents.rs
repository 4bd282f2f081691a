use iced::alignment::{Horizontal, Vertical};
use iced::widget::{column, container, mouse_area, row, scrollable, text};
use iced::{mouse, Color, Element, Length};

use crate::app::{Message, TimerApp};
use crate::theme::ThemeColors;

const CHIP_SIZE: f32 = 50.0;

impl TimerApp {
    /// "Recent" header and a horizontal strip of chips, newest first.
    /// Left click loads a chip into the picker, right click deletes it.
    pub(crate) fn view_recents(&self, colors: &ThemeColors, editable: bool) -> Element<'_, Message> {
        let recents = self.home.recents();

        // Header keeps its space even when there is nothing below it.
        let header_color = if recents.is_empty() {
            Color::TRANSPARENT
        } else {
            colors.label
        };
        let header = text("Recent").size(colors.label_text).color(header_color);

        let mut chips = row![].spacing(12).padding([10, 0]);
        for entry in recents {
            let chip = container(
                text(entry.label())
                    .size(colors.label_text)
                    .color(colors.chip_fg),
            )
            .width(CHIP_SIZE)
            .height(CHIP_SIZE)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(colors.chip_style());

            if editable {
                chips = chips.push(
                    mouse_area(chip)
                        .on_press(Message::SelectRecent(entry.id))
                        .on_right_press(Message::DeleteRecent(entry.id))
                        .interaction(mouse::Interaction::Pointer),
                );
            } else {
                chips = chips.push(chip);
            }
        }

        let strip = scrollable(chips)
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new().width(0.0).scroller_width(0.0),
            ))
            .width(Length::Fill);

        column![header, strip].spacing(4).width(Length::Fill).into()
    }
}
