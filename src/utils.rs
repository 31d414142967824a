use chrono::{Datelike, NaiveDate};

/// Directory name for one day's downloads, e.g. `5-3-2024_` (no zero padding)
pub fn date_tag(date: NaiveDate) -> String {
    format!("{}-{}-{}_", date.day(), date.month(), date.year())
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Extension used when saving an image: everything after the last `.` of the URL.
///
/// A URL without any `.` is returned whole.
pub fn file_extension(url: &str) -> &str {
    url.rsplit('.').next().unwrap_or(url)
}

/// File name for the `index`-th image of a batch (1-based)
pub fn image_file_name(index: usize, url: &str) -> String {
    format!("img{}.{}", index, file_extension(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_tag_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(date_tag(date), "5-3-2024_");

        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(date_tag(date), "31-12-2023_");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("http://x.com/1.png"), "png");
        assert_eq!(file_extension("http://x.com/photo.large.jpeg"), "jpeg");
        // Query strings are kept as-is
        assert_eq!(file_extension("http://x.com/a.gif?v=2"), "gif?v=2");
        assert_eq!(file_extension("no-dots-here"), "no-dots-here");
    }

    #[test]
    fn test_image_file_name() {
        assert_eq!(image_file_name(1, "http://x.com/1.png"), "img1.png");
        assert_eq!(image_file_name(12, "http://x.com/2.jpg"), "img12.jpg");
    }
}
