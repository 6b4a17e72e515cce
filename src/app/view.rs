use super::messages::Message;
use super::state::App;
use crate::theme::{BookPalette, with_alpha};
use flipbook_core::{CurlSide, FlipSetup, LayoutMode, OverlayState, PageIndex};
use iced::widget::{Space, Stack, container, image};
use iced::{Background, Color, ContentFit, Element, Length, Padding};

/// Horizontal placement of the turning page at `angle` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct FlipGeometry {
    /// Left edge relative to the book.
    pub x: f32,
    /// Width after foreshortening.
    pub width: f32,
    pub shows_front: bool,
}

/// The page rotates around the spine. Its projected width is
/// `page_width * |cos(angle)|`; once past 90 degrees it lies on the other side
/// of the hinge and shows its back face.
pub(super) fn flip_geometry(setup: &FlipSetup, angle: f32, page_width: f32) -> FlipGeometry {
    let cos = angle.to_radians().cos();
    let width = page_width * cos.abs();
    let hinge = setup.hinge_x(page_width);
    let shows_front = cos >= 0.0;
    let extends_right = matches!(setup.side, CurlSide::Right) == shows_front;
    let x = if extends_right { hinge } else { hinge - width };
    FlipGeometry {
        x,
        width,
        shows_front,
    }
}

fn placed<'a>(content: impl Into<Element<'a, Message>>, x: f32, y: f32) -> Element<'a, Message> {
    container(content)
        .padding(Padding {
            top: y,
            right: 0.0,
            bottom: 0.0,
            left: x,
        })
        .into()
}

fn tint<'a>(color: Color, alpha: f32, width: f32, height: f32) -> Element<'a, Message> {
    fill(with_alpha(color, alpha), width, height)
}

/// Shade over the book and shine over the turning face. Overlay values are
/// used as opacities unscaled.
fn overlay_fills(overlay: &OverlayState, palette: &BookPalette) -> (Color, Color) {
    (
        with_alpha(palette.shade, overlay.shade),
        with_alpha(palette.shine, overlay.shine),
    )
}

fn fill<'a>(color: Color, width: f32, height: f32) -> Element<'a, Message> {
    container(Space::new(Length::Fixed(width), Length::Fixed(height)))
        .style(move |_| container::Style {
            background: Some(Background::Color(color)),
            ..container::Style::default()
        })
        .into()
}

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let palette = self.theme.palette();
        let bounds = self.book_bounds();
        let page_width = self.config.page_width;
        let page_height = self.config.page_height;
        let surface = &self.surface;

        let mut book = Stack::new()
            .width(Length::Fixed(bounds.width))
            .height(Length::Fixed(page_height));

        let right_x = match surface.layout {
            LayoutMode::Spread => {
                book = book.push(self.page(surface.left, page_width, &palette));
                page_width
            }
            LayoutMode::Single => 0.0,
        };
        book = book.push(placed(
            self.page(surface.right, page_width, &palette),
            right_x,
            0.0,
        ));

        let overlay = &surface.overlay;
        let (shade, shine) = overlay_fills(overlay, &palette);
        if overlay.shade > 0.0 {
            book = book.push(fill(shade, bounds.width, page_height));
        }

        if let Some(setup) = surface.flip {
            let geometry = flip_geometry(&setup, surface.angle, page_width);
            let face = Stack::new()
                .push(self.page(surface.visible_face(), geometry.width, &palette))
                .push(fill(shine, geometry.width, page_height));
            book = book.push(placed(face, geometry.x, 0.0));
        }

        for side in [CurlSide::Left, CurlSide::Right] {
            let layer = overlay.layer(side);
            if layer.alpha <= 0.0 {
                continue;
            }
            let size = layer.size.fraction() * page_width;
            let x = match side {
                CurlSide::Left => 0.0,
                CurlSide::Right => bounds.width - size,
            };
            book = book.push(placed(
                tint(palette.curl, layer.alpha, size, size),
                x,
                page_height - size,
            ));
        }

        let backdrop = palette.backdrop;
        container(placed(book, bounds.x, bounds.y))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(backdrop)),
                ..container::Style::default()
            })
            .into()
    }

    fn page(
        &self,
        page: Option<PageIndex>,
        width: f32,
        palette: &BookPalette,
    ) -> Element<'_, Message> {
        let height = self.config.page_height;
        match page {
            Some(page) => image(self.page_handle(page))
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Fill)
                .into(),
            None => tint(palette.blank_page, 1.0, width, height),
        }
    }
}
