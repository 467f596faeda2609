use maud::{Markup, html};

use crate::filter::GalleryFilter;
use crate::models::GalleryImage;
use crate::pages::{Site, chips, empty_state, layout, page_header};
use crate::reveal::{Direction, staggered};

pub const PATH: &str = "/gallery";

pub fn render(site: &Site, images: &[&GalleryImage], filter: &GalleryFilter) -> Markup {
    let content = html! {
        (page_header("Gallery", Some("Moments from the studio, the stage and everywhere in between.")))
        (chips(PATH, "Category", filter, |f| &mut f.category))
        @if images.is_empty() {
            (empty_state("No photos in this category yet."))
        } @else {
            div.grid.gallery-grid {
                (staggered(images, &site.stagger, site.reveal.direction(Direction::None), |image| {
                    html! {
                        figure.card.gallery-item data-id=(image.id) {
                            img src=(image.src) alt=(image.alt) loading="lazy";
                            figcaption { (image.alt) }
                        }
                    }
                }))
            }
        }
    };

    layout(site, PATH, "Gallery", content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::filter::apply;
    use crate::settings::Settings;

    #[test]
    fn test_category_filter_renders_only_matching() {
        let site = Site::from_settings(&Settings::default());
        let filter = GalleryFilter::parse(Some("studio"));
        let images = apply(&Catalog::studio().gallery, &filter);
        let html = render(&site, &images, &filter).into_string();
        assert_eq!(html.matches("<figure").count(), 3);
        assert!(html.contains("Studio A with sprung floor and mirrors"));
        assert!(!html.contains("Snow scene"));
    }

    #[test]
    fn test_empty_category_message() {
        let site = Site::from_settings(&Settings::default());
        let filter = GalleryFilter::parse(Some("backstage"));
        let html = render(&site, &[], &filter).into_string();
        assert!(html.contains("No photos in this category yet."));
    }
}
