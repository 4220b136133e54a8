#[cfg(test)]
mod tests {
    use bson::oid::ObjectId;
    use bson::{Bson, doc};
    use chrono::{TimeZone, Utc};

    use crate::database::documents::{
        BlogCardDocument, BlogDocument, BlogSummaryDocument, UserDocument,
    };
    use newsx_core::domain::{
        Blog, BlogCard, BlogSummary, Categories, DocumentId, NewBlog, NewUser, PublishDate, User,
        Views,
    };

    fn new_blog() -> NewBlog {
        NewBlog {
            title: "Markets rally".to_owned(),
            categories: Categories::Many(vec!["business".to_owned(), "world".to_owned()]),
            author: "Desk".to_owned(),
            summary: "Stocks up".to_owned(),
            content: "Full story".to_owned(),
            image_url: Some("https://img.newsx.dev/1.png".to_owned()),
            publish_date: Some(Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap().into()),
            status: Some("published".to_owned()),
            views: Some(Views::Count(42)),
        }
    }

    #[test]
    fn object_ids_map_to_identical_hex() {
        let oid = ObjectId::new();
        let id = DocumentId::from(oid);

        assert_eq!(id.to_hex(), oid.to_hex());
        assert_eq!(id.object_id(), oid);
    }

    #[test]
    fn blog_document_stores_native_dates_and_camel_case_image() {
        let document = bson::to_document(&BlogDocument::from(new_blog())).unwrap();

        assert!(matches!(document.get("publish_date"), Some(Bson::DateTime(_))));
        assert_eq!(
            document.get_str("imageUrl").unwrap(),
            "https://img.newsx.dev/1.png"
        );
        assert_eq!(document.get_i64("views").unwrap(), 42);
        assert!(matches!(document.get("_id"), Some(Bson::ObjectId(_))));
    }

    #[test]
    fn stored_blog_reads_back_into_domain() {
        let stored = BlogDocument::from(new_blog());
        let oid = stored.id;
        let raw = bson::to_document(&stored).unwrap();

        let blog: Blog = bson::from_document::<BlogDocument>(raw).unwrap().into();

        assert_eq!(blog.id.to_hex(), oid.to_hex());
        assert_eq!(blog.views, Some(Views::Count(42)));
        assert_eq!(blog.publish_date, new_blog().publish_date);
        assert_eq!(blog.categories, new_blog().categories);
    }

    #[test]
    fn card_projection_without_id_decodes() {
        let raw = doc! {
            "title": "Markets rally",
            "categories": "business",
            "summary": "Stocks up",
            "author": "Desk",
        };

        let card: BlogCard = bson::from_document::<BlogCardDocument>(raw).unwrap().into();

        assert!(card.id.is_none());
        assert!(card.publish_date.is_none());
        assert_eq!(card.categories, Categories::One("business".to_owned()));
    }

    #[test]
    fn card_projection_toggles_id() {
        assert_eq!(BlogCardDocument::projection(false).get_i32("_id").unwrap(), 0);
        assert_eq!(BlogCardDocument::projection(true).get_i32("_id").unwrap(), 1);
    }

    #[test]
    fn odd_counters_are_kept_as_stored() {
        let raw = doc! {
            "_id": ObjectId::new(),
            "title": "Odd counter",
            "author": "Desk",
            "views": -5_i64,
        };

        let summary: BlogSummary = bson::from_document::<BlogSummaryDocument>(raw)
            .unwrap()
            .into();

        assert_eq!(summary.views, Some(Views::Count(-5)));
        assert!(summary.status.is_none());
    }

    #[test]
    fn user_document_round_trips_fields() {
        let stored = UserDocument::from(NewUser {
            name: "admin".to_owned(),
            email: "admin@newsx.dev".to_owned(),
            password: "secret".to_owned(),
        });
        let raw = bson::to_document(&stored).unwrap();
        let user: User = bson::from_document::<UserDocument>(raw).unwrap().into();

        assert!(user.is_admin());
        assert_eq!(user.email, "admin@newsx.dev");
    }

    #[test]
    fn legacy_string_dates_decode_in_every_projection() {
        let raw = doc! {
            "_id": ObjectId::new(),
            "title": "Imported post",
            "categories": ["archive"],
            "author": "Desk",
            "summary": "From the old site",
            "content": "Body",
            "publish_date": "2023-11-05",
            "views": "12",
        };

        let blog: Blog = bson::from_document::<BlogDocument>(raw.clone())
            .unwrap()
            .into();
        let card: BlogCard = bson::from_document::<BlogCardDocument>(raw.clone())
            .unwrap()
            .into();
        let summary: BlogSummary = bson::from_document::<BlogSummaryDocument>(raw)
            .unwrap()
            .into();

        let expected = Some(PublishDate::Text("2023-11-05".to_owned()));
        assert_eq!(blog.publish_date, expected);
        assert_eq!(card.publish_date, expected);
        assert_eq!(summary.publish_date, expected);
        assert_eq!(summary.views, Some(Views::Text("12".to_owned())));
    }

    #[test]
    fn submitted_text_date_is_stored_verbatim() {
        let blog = NewBlog {
            publish_date: Some(PublishDate::Text("2025-04-01".to_owned())),
            views: Some(Views::Decimal(1.0)),
            ..new_blog()
        };

        let document = bson::to_document(&BlogDocument::from(blog)).unwrap();

        assert_eq!(document.get_str("publish_date").unwrap(), "2025-04-01");
        assert_eq!(document.get_f64("views").unwrap(), 1.0);
    }

    #[test]
    fn int32_counters_widen() {
        let raw = doc! {
            "_id": ObjectId::new(),
            "title": "Counter",
            "author": "Desk",
            "views": 7_i32,
        };

        let summary: BlogSummary = bson::from_document::<BlogSummaryDocument>(raw)
            .unwrap()
            .into();

        assert_eq!(summary.views, Some(Views::Count(7)));
    }
}
