use crate::envelope::BanksData;
use crate::error::ClientResult;
use crate::outcome::OK;
use crate::request::Request;
use crate::service::BankService;
use crate::transport::Transport;
use bank_core::Banks;

impl<T: Transport> BankService<T> {
    /// Every bank accounts can be opened at
    pub async fn get_banks(&self) -> ClientResult<Banks> {
        self.exchange::<BanksData>(Request::get("/bank"), OK).await
    }
}
