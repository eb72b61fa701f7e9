use iced::widget::{button, column, container, pick_list, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

use super::{CreateMessage, PortListState, PortsViewModel};
use crate::models::{FormField, PortOption};
use crate::style;
use crate::ui::messages::Message;

/// The port-selection step: two dropdowns fed by the independently loaded
/// port lists, an advisory note, and the step navigation.
pub fn view_select_ports<'a>(vm: PortsViewModel<'a>) -> Element<'a, Message> {
    let header = container(
        column![
            text("Ports").size(28),
            text("Select the source and destination of your connection.").size(16),
        ]
        .spacing(5),
    )
    .width(Length::Fill)
    .padding(15)
    .style(style::bordered_box);

    let advisory = container(
        text(
            "IBM Cloud is only available on plans. Only ports with plans will be \
             listed below. Credit card and invoice payment options coming soon.",
        )
        .size(14),
    )
    .width(Length::Fill)
    .padding(15)
    .style(style::advisory_box);

    let src_field = column![
        text("Source port").size(16),
        port_select_control(
            vm.src_ports,
            vm.src_port_id,
            FormField::SrcPortId,
            vm.field_has_error(FormField::SrcPortId),
        ),
    ]
    .spacing(5);

    let dest_label = row![
        text("Interconnect destination").size(16),
        tooltip(
            text("(?)").size(14),
            container(text("The IBM port you wish to connect to.").size(14))
                .padding(8)
                .style(style::bordered_box),
            tooltip::Position::Top,
        ),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let dest_field = column![
        dest_label,
        port_select_control(
            vm.dest_ports,
            vm.dest_port_id,
            FormField::DestPortId,
            vm.field_has_error(FormField::DestPortId),
        ),
    ]
    .spacing(5);

    let form = container(column![src_field, dest_field].spacing(20))
        .width(Length::Fill)
        .padding(15)
        .style(style::bordered_box);

    let next_button = button(container(text("Next: Connection")).center_x(Length::Fill))
        .on_press(Message::Create(CreateMessage::NextStep))
        .padding(12)
        .width(220)
        .style(button::primary);

    let cancel_button = button(text("Cancel"))
        .on_press(Message::CancelCreate)
        .padding(12)
        .style(button::secondary);

    let navigation = container(
        row![next_button, cancel_button]
            .spacing(15)
            .width(Length::Fill)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(15)
    .style(style::bordered_box);

    let content = column![
        header,
        advisory,
        form,
        container(column![]).height(Length::Fill),
        navigation,
    ]
    .width(Length::Fill)
    .spacing(15);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::main_box)
        .into()
}

/// One port dropdown. Loading and load-failure states from the list are
/// rendered inline; the error highlight is driven entirely by the caller.
fn port_select_control<'a>(
    list: &'a PortListState,
    selected_id: &str,
    field: FormField,
    has_error: bool,
) -> Element<'a, Message> {
    if list.is_loading {
        return text("Loading ports...").size(14).into();
    }

    if let Some(error) = &list.error {
        return text(format!("Failed to load ports: {}", error))
            .size(14)
            .style(style::invalid_text_style)
            .into();
    }

    let selected = list.find(selected_id).cloned();

    pick_list(list.items.clone(), selected, move |port: PortOption| {
        Message::Create(CreateMessage::UpdateFormValue(field, port.port_id))
    })
    .placeholder("Select a port...")
    .width(Length::Fill)
    .style(if has_error {
        style::invalid_pick_list
    } else {
        style::pick_list_style
    })
    .into()
}

/// The connection step: summary of the chosen ports plus the connection
/// name.
pub fn view_configure_connection<'a>(
    connection_name: &'a str,
    src_port: Option<&'a PortOption>,
    dest_port: Option<&'a PortOption>,
) -> Element<'a, Message> {
    let header = container(
        column![
            text("Connection").size(28),
            text("Review the selected ports and name your connection.").size(16),
        ]
        .spacing(5),
    )
    .width(Length::Fill)
    .padding(15)
    .style(style::bordered_box);

    let summary = container(
        column![
            summary_row("Source port", src_port),
            summary_row("Destination port", dest_port),
        ]
        .spacing(10),
    )
    .width(Length::Fill)
    .padding(15)
    .style(style::bordered_box);

    let name_field = column![
        text("Connection name").size(16),
        text_input("Name this connection", connection_name)
            .on_input(|name| Message::Create(CreateMessage::SetConnectionName(name)))
            .width(Length::Fill)
            .style(style::default_text_input),
    ]
    .spacing(5);

    let form = container(name_field)
        .width(Length::Fill)
        .padding(15)
        .style(style::bordered_box);

    let back_button = button(text("Back: Ports"))
        .on_press(Message::Create(CreateMessage::BackToPorts))
        .padding(12)
        .width(160)
        .style(button::secondary);

    let submit_label = container(text("Create connection")).center_x(Length::Fill);
    let submit_button = if connection_name.trim().is_empty() {
        button(submit_label).padding(12).width(220).style(button::secondary)
    } else {
        button(submit_label)
            .on_press(Message::Create(CreateMessage::Submit))
            .padding(12)
            .width(220)
            .style(button::primary)
    };

    let navigation = container(
        row![back_button, submit_button]
            .spacing(15)
            .width(Length::Fill)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(15)
    .style(style::bordered_box);

    let content = column![
        header,
        summary,
        form,
        container(column![]).height(Length::Fill),
        navigation,
    ]
    .width(Length::Fill)
    .spacing(15);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::main_box)
        .into()
}

fn summary_row<'a>(label: &'a str, port: Option<&'a PortOption>) -> Element<'a, Message> {
    let value = match port {
        Some(port) => text(port.to_string()).size(14),
        None => text("Not available").size(14),
    };

    row![text(label).size(14).width(180), value]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
}

/// Terminal confirmation screen of the wizard.
pub fn view_completion<'a>(connection_name: &'a str) -> Element<'a, Message> {
    let content = column![
        container(column![]).height(Length::Fill),
        text("Connection requested").size(28),
        text(format!(
            "The interconnection '{}' has been submitted for provisioning.",
            connection_name
        ))
        .size(16),
        button(text("Back to search"))
            .on_press(Message::BackToSearch)
            .padding(12)
            .style(button::primary),
        container(column![]).height(Length::Fill),
    ]
    .width(Length::Fill)
    .spacing(20)
    .align_x(Alignment::Center)
    .padding(30);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::main_box)
        .into()
}
