use iced::alignment::Horizontal;
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Color, Element, Length};

use crate::style;
use crate::ui::messages::Message;

/// Entry screen of the application, standing where the connection search
/// page of the portal would.
pub fn view_search_screen<'a>(
    has_draft: bool,
    error_message: Option<&'a str>,
) -> Element<'a, Message> {
    let title = text("Cloud Interconnect Wizard")
        .size(38)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let description = text(
        "Create a network interconnection between your infrastructure and IBM Cloud.",
    )
    .size(16)
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    let create_button = button(
        container(text("New IBM Cloud Connection")).center_x(Length::Fill),
    )
    .width(280)
    .padding(14)
    .style(button::primary)
    .on_press(Message::StartCreate);

    // Hint shown when a previous session left a draft behind
    let draft_hint = if has_draft {
        container(
            text("A saved draft from a previous session will be restored.").size(14),
        )
        .width(Length::Fill)
        .padding(15)
        .style(style::advisory_box)
    } else {
        container(column![])
    };

    let error_container = if let Some(error) = error_message {
        container(
            row![text(error).size(14).color(Color::from_rgb(0.7, 0.0, 0.0))]
                .spacing(10)
                .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(15)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgb(1.0, 0.95, 0.95).into()),
            border: iced::Border {
                radius: 8.0.into(),
                width: 1.0,
                color: Color::from_rgb(0.8, 0.0, 0.0),
            },
            ..container::Style::default()
        })
    } else {
        container(column![])
    };

    let version_text = text(format!("v{}", env!("CARGO_PKG_VERSION"))).size(12);

    let mut content_items = vec![
        title.into(),
        container(description).padding([0.0, 20.0]).into(),
    ];

    if error_message.is_some() {
        content_items.push(error_container.into());
    }

    if has_draft {
        content_items.push(draft_hint.into());
    }

    content_items.extend([
        container(column![]).height(Length::Fill).into(),
        create_button.into(),
        container(column![]).height(Length::Fill).into(),
        version_text.into(),
    ]);

    let content = column(content_items)
        .width(Length::Fill)
        .spacing(15)
        .align_x(Alignment::Center)
        .padding(30);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
