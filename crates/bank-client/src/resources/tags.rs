use crate::envelope::{TagData, TagsData};
use crate::error::ClientResult;
use crate::outcome::{CREATED, OK};
use crate::request::Request;
use crate::service::BankService;
use crate::transport::Transport;
use bank_core::{Tag, Tags, Uuid};

impl<T: Transport> BankService<T> {
    /// The default tags available to everyone
    pub async fn get_tags(&self) -> ClientResult<Tags> {
        self.exchange::<TagsData>(Request::get("/tag"), OK).await
    }

    /// Tags created by a user or organisation
    pub async fn get_entity_tags(&self, entity: Uuid) -> ClientResult<Tags> {
        let request = Request::get("/tag/entity/-").uuid(entity);
        self.exchange::<TagsData>(request, OK).await
    }

    pub async fn create_tag(&self, tag: &Tag) -> ClientResult<Tag> {
        let request = Request::post("/tag").json(tag)?;
        self.exchange::<TagData>(request, CREATED).await
    }

    pub async fn update_tag(&self, tag: &Tag) -> ClientResult<Tag> {
        let request = Request::put("/tag/-").json(tag)?;
        self.exchange::<TagData>(request, OK).await
    }

    pub async fn delete_tag(&self, tag: Uuid) -> ClientResult<()> {
        let request = Request::delete("/tag/-").uuid(tag);
        self.exchange_empty(request, OK).await
    }
}
