use std::sync::LazyLock;

use regex::Regex;

use crate::post::post_model::CreatePostRequest;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .unwrap_or_else(|e| panic!("email pattern failed to compile: {e}"))
});

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Field-presence check applied to a post before it is created.
pub fn is_post_form_data_valid(data: &CreatePostRequest) -> bool {
    let required = [
        data.user_name.as_str(),
        data.title.as_str(),
        data.book.title.as_str(),
        data.book.authors.as_str(),
        data.description.as_str(),
    ];

    required.iter().all(|field| !is_blank(field))
        && (MIN_RATING..=MAX_RATING).contains(&data.rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::post_model::Book;
    use rstest::rstest;

    fn form() -> CreatePostRequest {
        CreatePostRequest {
            user_name: "alice".into(),
            book: Book {
                title: "Dune".into(),
                authors: "Frank Herbert".into(),
                image: String::new(),
            },
            title: "T1".into(),
            rating: 4.0,
            description: "d".into(),
            image: None,
        }
    }

    #[rstest]
    #[case("alice@example.com", true)]
    #[case("a.b+tag@mail.example.co.uk", true)]
    #[case("not-an-email", false)]
    #[case("missing@tld", false)]
    #[case("@example.com", false)]
    #[case("spaces in@example.com", false)]
    fn email_format(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(email), expected);
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(is_post_form_data_valid(&form()));
    }

    #[rstest]
    #[case::blank_user(|f: &mut CreatePostRequest| f.user_name = "  ".into())]
    #[case::blank_title(|f: &mut CreatePostRequest| f.title = String::new())]
    #[case::blank_book_title(|f: &mut CreatePostRequest| f.book.title = String::new())]
    #[case::blank_authors(|f: &mut CreatePostRequest| f.book.authors = "\t".into())]
    #[case::blank_description(|f: &mut CreatePostRequest| f.description = String::new())]
    #[case::rating_too_low(|f: &mut CreatePostRequest| f.rating = 0.0)]
    #[case::rating_too_high(|f: &mut CreatePostRequest| f.rating = 6.0)]
    #[case::rating_negative(|f: &mut CreatePostRequest| f.rating = -1.0)]
    #[case::rating_far_out_of_range(|f: &mut CreatePostRequest| f.rating = 300.0)]
    fn incomplete_form_is_invalid(#[case] break_form: fn(&mut CreatePostRequest)) {
        let mut data = form();
        break_form(&mut data);
        assert!(!is_post_form_data_valid(&data));
    }

    #[rstest]
    #[case(1.0)]
    #[case(4.5)]
    #[case(5.0)]
    fn fractional_ratings_within_range_are_valid(#[case] rating: f64) {
        let mut data = form();
        data.rating = rating;
        assert!(is_post_form_data_valid(&data));
    }

    #[test]
    fn image_fields_are_optional() {
        let mut data = form();
        data.image = None;
        data.book.image = String::new();
        assert!(is_post_form_data_valid(&data));
    }
}
