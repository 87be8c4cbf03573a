use crate::envelope::{AccountData, AccountsData};
use crate::error::ClientResult;
use crate::outcome::{CREATED, OK};
use crate::request::Request;
use crate::service::BankService;
use crate::transport::Transport;
use bank_core::{Account, Accounts, Uuid};

impl<T: Transport> BankService<T> {
    /// Accounts owned by a user
    ///
    /// Served from the `/bank-account` listing, which answers with the
    /// `Account` shape under `accounts`.
    pub async fn get_user_accounts(&self, user: Uuid) -> ClientResult<Accounts> {
        let request = Request::get("/bank-account/user/-").uuid(user);
        self.exchange::<AccountsData>(request, OK).await
    }

    /// Accounts owned by an organisation
    pub async fn get_organisation_accounts(&self, organisation: Uuid) -> ClientResult<Accounts> {
        let request = Request::get("/bank-account/organisation/-").uuid(organisation);
        self.exchange::<AccountsData>(request, OK).await
    }

    /// Accounts owned by an entity, whichever kind of owner it is
    pub async fn get_entity_accounts(&self, entity: Uuid) -> ClientResult<Accounts> {
        let request = Request::get("/account/entity/-").uuid(entity);
        self.exchange::<AccountsData>(request, OK).await
    }

    pub async fn create_account(&self, account: &Account) -> ClientResult<Account> {
        let request = Request::post("/account").json(account)?;
        self.exchange::<AccountData>(request, CREATED).await
    }

    pub async fn update_account(&self, account: &Account) -> ClientResult<Account> {
        let request = Request::put("/account/-").json(account)?;
        self.exchange::<AccountData>(request, OK).await
    }

    /// Deactivate an account
    pub async fn delete_account(&self, account: Uuid) -> ClientResult<()> {
        let request = Request::delete("/account/-").uuid(account);
        self.exchange_empty(request, OK).await
    }
}
