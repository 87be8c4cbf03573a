use crate::envelope::{ItemData, ItemTags};
use crate::error::ClientResult;
use crate::outcome::{CREATED, OK};
use crate::request::Request;
use crate::service::BankService;
use crate::transport::Transport;
use bank_core::{Item, Uuid};

impl<T: Transport> BankService<T> {
    pub async fn create_item(&self, item: &Item) -> ClientResult<Item> {
        let request = Request::post("/item").json(item)?;
        self.exchange::<ItemData>(request, CREATED).await
    }

    pub async fn update_item(&self, item: &Item) -> ClientResult<Item> {
        let request = Request::put("/item/-").json(item)?;
        self.exchange::<ItemData>(request, OK).await
    }

    pub async fn delete_item(&self, item: Uuid) -> ClientResult<()> {
        let request = Request::delete("/item/-").uuid(item);
        self.exchange_empty(request, OK).await
    }

    /// Attach tags to an item, returning the item with its new tag list
    ///
    /// Although this is a POST, the service answers 200: the item itself is
    /// not created.
    pub async fn add_item_tags(&self, item: Uuid, tags: &[Uuid]) -> ClientResult<Item> {
        let body = ItemTags {
            uuid: item,
            tag_uuids: tags,
        };
        let request = Request::post("/item/-/tag").json(&body)?;
        self.exchange::<ItemData>(request, OK).await
    }

    /// Detach tags from an item
    pub async fn remove_item_tags(&self, item: Uuid, tags: &[Uuid]) -> ClientResult<Item> {
        let request = tags
            .iter()
            .fold(Request::delete("/item/-/tag/-").uuid(item), |request, tag| {
                request.param("tag_uuids", tag.to_string())
            });
        self.exchange::<ItemData>(request, OK).await
    }

    /// Make `tags` the item's complete tag list
    pub async fn replace_item_tags(&self, item: Uuid, tags: &[Uuid]) -> ClientResult<Item> {
        let body = ItemTags {
            uuid: item,
            tag_uuids: tags,
        };
        let request = Request::put("/item/-/tag/-").json(&body)?;
        self.exchange::<ItemData>(request, OK).await
    }
}

#[cfg(test)]
mod tests {
    use crate::resources::fixtures::{service, uuid};
    use crate::testing::Exchange;
    use crate::transport::Method;
    use bank_core::Item;

    const ITEM: &str = "b5b3df71-d3cc-4069-9912-a0e7237aee2b";
    const MUSIC: &str = "11982575-1b9f-4f67-88fa-4a3228119044";
    const TECH: &str = "91499027-ad4d-4cea-b18e-4a8d474e0874";

    fn item_with_tags(tags: &[(&str, &str)]) -> String {
        let tags: Vec<String> = tags
            .iter()
            .map(|(id, label)| format!(r#"{{"uuid":"{id}","tag":"{label}","active":true}}"#))
            .collect();
        format!(
            r#"{{"message":"item updated","data":{{"item":{{"uuid":"{ITEM}","description":"jbl flip se 2","amount":2400,"tags":[{}]}}}},"errors":{{}}}}"#,
            tags.join(",")
        )
    }

    #[tokio::test]
    async fn test_create_item() {
        let service = service(vec![Exchange::json(201, &item_with_tags(&[]))]);
        let draft = Item {
            transaction_uuid: uuid("2b5b5fe0-ba22-4f7f-b1de-499472193202"),
            description: "jbl flip se 2".into(),
            amount: 2400.0,
            ..Item::default()
        };

        let created = service.create_item(&draft).await.unwrap();
        assert_eq!(created.uuid, uuid(ITEM));
        assert!(created.tags.is_empty());

        let request = service.transport().last_request().unwrap();
        assert_eq!(request.url.path(), "/item");
        assert_eq!(
            request.json_body().unwrap()["transaction_uuid"],
            "2b5b5fe0-ba22-4f7f-b1de-499472193202"
        );
    }

    #[tokio::test]
    async fn test_update_and_delete_item() {
        let service = service(vec![
            Exchange::json(200, &item_with_tags(&[])),
            Exchange::json(200, r#"{"data":{}}"#),
        ]);

        let item = Item {
            uuid: uuid(ITEM),
            ..Item::default()
        };
        service.update_item(&item).await.unwrap();
        service.delete_item(item.uuid).await.unwrap();

        let requests = service.transport().requests();
        assert_eq!((requests[0].method, requests[0].url.path()), (Method::Put, "/item/-"));
        assert_eq!((requests[1].method, requests[1].url.path()), (Method::Delete, "/item/-"));
        assert_eq!(requests[1].query_values("uuid"), vec![ITEM]);
    }

    #[tokio::test]
    async fn test_add_item_tags_expects_200() {
        let service = service(vec![Exchange::json(
            200,
            &item_with_tags(&[(MUSIC, "music"), (TECH, "technology")]),
        )]);

        let item = service
            .add_item_tags(uuid(ITEM), &[uuid(MUSIC), uuid(TECH)])
            .await
            .unwrap();
        assert_eq!(item.tags.len(), 2);

        let request = service.transport().last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url.path(), "/item/-/tag");
        let body = request.json_body().unwrap();
        assert_eq!(body["uuid"], ITEM);
        assert_eq!(body["tag_uuids"], serde_json::json!([MUSIC, TECH]));
    }

    #[tokio::test]
    async fn test_add_item_tags_created_is_unexpected() {
        let service = service(vec![Exchange::json(201, &item_with_tags(&[(MUSIC, "music")]))]);
        let err = service
            .add_item_tags(uuid(ITEM), &[uuid(MUSIC)])
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(201));
    }

    #[tokio::test]
    async fn test_remove_item_tags_uses_repeated_query() {
        let service = service(vec![Exchange::json(200, &item_with_tags(&[]))]);

        let item = service
            .remove_item_tags(uuid(ITEM), &[uuid(MUSIC), uuid(TECH)])
            .await
            .unwrap();
        assert!(item.tags.is_empty());

        let request = service.transport().last_request().unwrap();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.url.path(), "/item/-/tag/-");
        assert_eq!(request.query_values("tag_uuids"), vec![MUSIC, TECH]);
        assert_eq!(request.query_values("uuid"), vec![ITEM]);
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_replace_item_tags() {
        let service = service(vec![Exchange::json(200, &item_with_tags(&[(TECH, "technology")]))]);

        let item = service
            .replace_item_tags(uuid(ITEM), &[uuid(TECH)])
            .await
            .unwrap();
        assert_eq!(item.tags[0].tag, "technology");

        let request = service.transport().last_request().unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url.path(), "/item/-/tag/-");
        assert_eq!(request.json_body().unwrap()["tag_uuids"], serde_json::json!([TECH]));
    }
}
