use super::messages::Message;
use super::state::{App, Phase, DECK_SCROLL_ID};
use crate::deck::{
    DeckLayout, FontChoice, Hotspot, LinkTarget, Overlay, PageDescriptor, TextAlign, TextOverlay,
    FOOTER_HEIGHT, HEADER_HEIGHT, PAGE_SPACING,
};
use crate::nav::SECTIONS;
use crate::theme::{self, palette};
use chrono::{Datelike, Local};
use iced::alignment::{Horizontal, Vertical};
use iced::font::{Family, Weight};
use iced::mouse::Interaction;
use iced::widget::text::LineHeight;
use iced::widget::{
    button, column, container, horizontal_space, image, mouse_area, row, scrollable, text, tooltip,
    Column, Row, Space, Stack,
};
use iced::{Color, ContentFit, Element, Font, Length, Padding, Size};
use std::time::Instant;

const CONTACT_EMAIL: &str = "mitikaria1999@gmail.com";
const LINKEDIN_URL: &str = "https://linkedin.com/in/mitikaria";

/// Pixels an artboard's content rises while its entrance fade runs.
const ENTRANCE_SLIDE: f32 = 50.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        match &self.phase {
            Phase::Loading { since, .. } => self.loading_screen(*since),
            Phase::Ready => self.deck_view(),
        }
    }

    /// Content-free loading indicator shown exclusively before the gate
    /// opens; no page content is mounted underneath it.
    fn loading_screen(&self, since: Instant) -> Element<'_, Message> {
        let dot_count = (self.now.duration_since(since).as_millis() / 300 % 4) as usize;
        let dots = ".".repeat(dot_count);
        let card = column![
            text("Miti Karia").size(28).font(display_font()),
            text(format!("Loading portfolio{dots}"))
                .size(14)
                .color(palette::GRAY),
        ]
        .spacing(12)
        .align_x(Horizontal::Center);

        container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(theme::loading_backdrop)
            .into()
    }

    fn deck_view(&self) -> Element<'_, Message> {
        let layout = self.layout();

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(self.deck_scrollable(&layout))
            .push(self.header())
            .push(self.progress_rail());
        if self.nav.show_scroll_top {
            layers = layers.push(self.scroll_top_button());
        }
        layers.into()
    }

    fn deck_scrollable(&self, layout: &DeckLayout) -> Element<'_, Message> {
        let mut pages = Column::new()
            .align_x(Horizontal::Center)
            .spacing(PAGE_SPACING)
            .padding(Padding {
                top: HEADER_HEIGHT + PAGE_SPACING,
                ..Padding::ZERO
            })
            .width(Length::Fill);

        for (idx, page) in self.pages.iter().enumerate() {
            pages = pages.push(self.artboard(page, idx, layout));
        }
        pages = pages.push(self.footer());

        scrollable(pages)
            .id(DECK_SCROLL_ID.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport| Message::Scrolled {
                offset: viewport.absolute_offset(),
                viewport_width: viewport.bounds().width,
                viewport_height: viewport.bounds().height,
            })
            .into()
    }

    /// One artboard: background layer below, content layer above.
    fn artboard<'a>(
        &'a self,
        page: &'a PageDescriptor,
        idx: usize,
        layout: &DeckLayout,
    ) -> Element<'a, Message> {
        let size = Size::new(layout.artboard_width, layout.artboard_height);
        let reveal = &self.reveals[idx];
        let opacity = reveal.progress(self.now);

        let mut stack = Stack::new()
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height));

        // Deferred loading: non-priority backgrounds only decode once their
        // page has actually entered the viewport. A slow or missing image
        // never blocks the overlays below.
        if let Some(path) = &page.background {
            if page.priority || reveal.is_revealed() {
                stack = stack.push(
                    image(image::Handle::from_path(path))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .content_fit(ContentFit::Cover)
                        .opacity(opacity),
                );
            }
        }

        for overlay in &page.overlays {
            stack = stack.push(match overlay {
                Overlay::Text(overlay) => self.text_overlay(overlay, size, opacity),
                Overlay::Hotspot(hotspot) => self.hotspot(hotspot, size),
            });
        }

        // Entrance slide: offset the content inside the fixed-size card and
        // clip, so the column's anchor math never moves.
        let slide = ENTRANCE_SLIDE * (1.0 - opacity);
        container(stack)
            .id(container::Id::new(page.anchor()))
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .padding(Padding {
                top: slide,
                ..Padding::ZERO
            })
            .clip(true)
            .style(theme::artboard(page.background_color))
            .into()
    }

    /// Selectable text at its percent position. Invisible ink by default;
    /// explicit colors fade in with the artboard.
    fn text_overlay<'a>(
        &'a self,
        overlay: &'a TextOverlay,
        artboard: Size,
        opacity: f32,
    ) -> Element<'a, Message> {
        let rect = overlay.resolve(artboard);
        let color = match overlay.color {
            Some(color) => palette::with_alpha(color, color.a * opacity),
            None => Color::TRANSPARENT,
        };

        let label = text(overlay.display_text())
            .size(overlay.font_px(artboard.width))
            .width(Length::Fixed(rect.width))
            .color(color)
            .font(overlay_font(overlay.font, overlay.weight))
            .line_height(LineHeight::Relative(overlay.line_height))
            .align_x(match overlay.align {
                TextAlign::Left => Horizontal::Left,
                TextAlign::Center => Horizontal::Center,
                TextAlign::Right => Horizontal::Right,
            });

        let content: Element<'_, Message> = match &overlay.link {
            Some(target) => mouse_area(label)
                .on_press(Message::LinkActivated(target.clone()))
                .interaction(Interaction::Pointer)
                .into(),
            None => label.into(),
        };

        positioned(content, rect.x, rect.y)
    }

    /// An invisible interactive region with a hover tint; its accessible
    /// label surfaces as a tooltip rather than visible content.
    fn hotspot<'a>(&'a self, hotspot: &'a Hotspot, artboard: Size) -> Element<'a, Message> {
        let rect = hotspot.region.resolve(artboard);
        let region = button(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fixed(rect.width))
            .height(Length::Fixed(rect.height))
            .padding(0)
            .style(theme::hotspot)
            .on_press(Message::LinkActivated(hotspot.target.clone()));

        let labeled = tooltip(
            region,
            text(hotspot.label.as_str()).size(12),
            tooltip::Position::FollowCursor,
        );
        positioned(labeled.into(), rect.x, rect.y)
    }

    /// Fixed header: wordmark, section links, menu toggle; solid background
    /// once scrolled past the collapse threshold.
    fn header(&self) -> Element<'_, Message> {
        let logo = button(text("Miti Karia").size(22).font(display_font()))
            .style(theme::nav_link(true))
            .padding([8, 0])
            .on_press(Message::JumpToPage(1));

        let mut links = Row::new().spacing(4).align_y(Vertical::Center);
        for section in SECTIONS {
            links = links.push(
                button(text(section.label).size(14))
                    .style(theme::nav_link(self.nav.active == section.id))
                    .padding([8, 12])
                    .on_press(Message::JumpToPage(section.page)),
            );
        }

        let menu_toggle = button(text(if self.nav.menu_open { "Close" } else { "Menu" }).size(14))
            .style(theme::nav_link(false))
            .padding([8, 12])
            .on_press(Message::ToggleMenu);

        let bar = row![logo, horizontal_space(), links, menu_toggle]
            .spacing(12)
            .align_y(Vertical::Center)
            .height(Length::Fixed(HEADER_HEIGHT));

        let mut header = column![bar];
        if self.nav.menu_open {
            header = header.push(self.menu());
        }

        container(header)
            .width(Length::Fill)
            .padding([0, 24])
            .style(theme::header(self.nav.collapsed || self.nav.menu_open))
            .into()
    }

    /// Collapsible menu listing every section with its page range.
    fn menu(&self) -> Element<'_, Message> {
        let mut items = Column::new().spacing(4).padding([12, 0]);
        for section in SECTIONS {
            let range = match section.end_page {
                Some(end) => format!("Page {} - {}", section.page, end),
                None => format!("Page {}", section.page),
            };
            let entry = column![
                text(range).size(11).color(palette::GRAY),
                text(section.label).size(15),
            ]
            .spacing(2);
            items = items.push(
                button(entry)
                    .width(Length::Fill)
                    .padding([10, 16])
                    .style(theme::menu_item(self.nav.active == section.id))
                    .on_press(Message::JumpToPage(section.page)),
            );
        }
        items.into()
    }

    /// Side progress rail: one dot per section, enlarged when active.
    fn progress_rail(&self) -> Element<'_, Message> {
        let mut dots = Column::new().spacing(10).align_x(Horizontal::Center);
        for section in SECTIONS {
            let active = self.nav.active == section.id;
            let diameter = if active { 12.0 } else { 8.0 };
            dots = dots.push(
                button(Space::new(Length::Fill, Length::Fill))
                    .width(Length::Fixed(diameter))
                    .height(Length::Fixed(diameter))
                    .padding(0)
                    .style(theme::nav_dot(active))
                    .on_press(Message::JumpToPage(section.page)),
            );
        }

        container(dots)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Center)
            .padding(16)
            .into()
    }

    fn scroll_top_button(&self) -> Element<'_, Message> {
        let control = button(
            text("↑")
                .size(18)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .width(Length::Fixed(48.0))
        .height(Length::Fixed(48.0))
        .padding(0)
        .style(theme::scroll_top)
        .on_press(Message::ScrollToTop);

        container(control)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(32)
            .into()
    }

    fn footer(&self) -> Element<'_, Message> {
        let email = button(text("Email").size(14))
            .padding([10, 24])
            .style(theme::footer_link)
            .on_press(Message::LinkActivated(LinkTarget::Mailto(
                CONTACT_EMAIL.to_string(),
            )));
        let linkedin = button(text("LinkedIn").size(14))
            .padding([10, 24])
            .style(theme::footer_link)
            .on_press(Message::LinkActivated(LinkTarget::External(
                LINKEDIN_URL.to_string(),
            )));

        let content = column![
            text("Let's Connect").size(32).font(display_font()),
            text(
                "I'm always open to discussing new projects, creative ideas, \
                 or opportunities to be part of your visions."
            )
            .size(14)
            .color(palette::with_alpha(Color::WHITE, 0.7))
            .width(Length::Fixed(440.0))
            .align_x(Horizontal::Center),
            row![email, linkedin].spacing(16),
            text(copyright_line())
                .size(12)
                .color(palette::with_alpha(Color::WHITE, 0.5)),
        ]
        .spacing(20)
        .align_x(Horizontal::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fixed(FOOTER_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(theme::footer)
            .into()
    }
}

/// Place `content` at a pixel offset inside a layer filling the artboard.
fn positioned(content: Element<'_, Message>, x: f32, y: f32) -> Element<'_, Message> {
    container(content)
        .padding(Padding {
            top: y,
            left: x,
            ..Padding::ZERO
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn copyright_line() -> String {
    format!("© {} Miti Karia. All rights reserved.", Local::now().year())
}

fn display_font() -> Font {
    Font {
        family: Family::Serif,
        ..Font::DEFAULT
    }
}

/// Map an overlay's font request onto the closed set of loaded families.
fn overlay_font(choice: FontChoice, weight: u16) -> Font {
    let family = match choice {
        FontChoice::Display => Family::Serif,
        FontChoice::Sans => Family::SansSerif,
        FontChoice::Mono => Family::Monospace,
    };
    Font {
        family,
        weight: nearest_weight(weight),
        ..Font::DEFAULT
    }
}

fn nearest_weight(weight: u16) -> Weight {
    match weight {
        0..=149 => Weight::Thin,
        150..=249 => Weight::ExtraLight,
        250..=349 => Weight::Light,
        350..=449 => Weight::Normal,
        450..=549 => Weight::Medium,
        550..=649 => Weight::Semibold,
        650..=749 => Weight::Bold,
        750..=849 => Weight::ExtraBold,
        _ => Weight::Black,
    }
}
