use maud::{Markup, html};

use crate::filter::NewsFilter;
use crate::models::BlogPost;
use crate::pages::{Site, chips, clear_filters, empty_state, layout, long_date, page_header};
use crate::reveal::{reveal, staggered};

pub const PATH: &str = "/news";

pub fn render(site: &Site, posts: &[&BlogPost], filter: &NewsFilter) -> Markup {
    let content = html! {
        (page_header("News", Some("Studio announcements, show updates and community stories.")))
        form.news-search method="get" action=(PATH) role="search" {
            label for="q" { "Search posts" }
            input id="q" type="search" name="q" value=(filter.query) placeholder="Search news...";
            @if let Some(category) = filter.category.query_value() {
                input type="hidden" name="category" value=(category);
            }
            button type="submit" { "Search" }
        }
        (chips(PATH, "Category", filter, |f| &mut f.category))
        (clear_filters(PATH, filter))
        @if posts.is_empty() {
            (empty_state("No posts match your search."))
        } @else {
            div.grid.news-grid {
                (staggered(posts, &site.stagger, site.reveal, |post| card(post)))
            }
        }
    };

    layout(site, PATH, "News", content)
}

fn card(post: &BlogPost) -> Markup {
    html! {
        article.card.news-card {
            img src=(post.image) alt="" loading="lazy";
            p.meta { (post.category.to_string()) " · " (long_date(post.date)) }
            h2 { a href={ "/news/" (post.slug) } { (post.title) } }
            p { (post.excerpt) }
        }
    }
}

pub fn render_post(site: &Site, post: &BlogPost) -> Markup {
    let path = format!("/news/{}", post.slug);
    let content = html! {
        (reveal(&site.reveal, html! {
            article.post {
                p.meta { (post.category.to_string()) " · " (long_date(post.date)) " · by " (post.author) }
                h1 { (post.title) }
                img.hero src=(post.image) alt="";
                p.lead { (post.excerpt) }
                p { (post.content) }
                p { a href=(PATH) { "← All news" } }
            }
        }))
    };
    layout(site, &path, post.title, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::filter::apply;
    use crate::settings::Settings;

    #[test]
    fn test_search_value_is_kept_in_form() {
        let site = Site::from_settings(&Settings::default());
        let filter = NewsFilter::parse(Some("community"), Some("fair"));
        let posts = apply(&Catalog::studio().posts, &filter);
        let html = render(&site, &posts, &filter).into_string();
        assert!(html.contains(r#"value="fair""#));
        assert!(html.contains(r#"<input type="hidden" name="category" value="community">"#));
        assert!(html.contains("Dancing at the Riverside Street Fair"));
        assert_eq!(html.matches("news-card").count(), 1);
    }

    #[test]
    fn test_no_results_message() {
        let site = Site::from_settings(&Settings::default());
        let filter = NewsFilter::parse(None, Some("hip hop"));
        let html = render(&site, &[], &filter).into_string();
        assert!(html.contains("No posts match your search."));
    }

    #[test]
    fn test_post_page() {
        let site = Site::from_settings(&Settings::default());
        let post = Catalog::studio().post_by_slug("welcome-priya").unwrap();
        let html = render_post(&site, post).into_string();
        assert!(html.contains("<h1>Welcome, Priya!</h1>"));
        assert!(html.contains("May 30, 2025"));
    }
}
