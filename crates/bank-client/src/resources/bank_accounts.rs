use crate::envelope::{BankAccountData, BankAccountsData};
use crate::error::ClientResult;
use crate::outcome::{CREATED, OK};
use crate::request::Request;
use crate::service::BankService;
use crate::transport::Transport;
use bank_core::{BankAccount, BankAccounts, Uuid};

impl<T: Transport> BankService<T> {
    pub async fn get_user_bank_accounts(&self, user: Uuid) -> ClientResult<BankAccounts> {
        let request = Request::get("/bank-account/user/-").uuid(user);
        self.exchange::<BankAccountsData>(request, OK).await
    }

    pub async fn get_organisation_bank_accounts(
        &self,
        organisation: Uuid,
    ) -> ClientResult<BankAccounts> {
        let request = Request::get("/bank-account/organisation/-").uuid(organisation);
        self.exchange::<BankAccountsData>(request, OK).await
    }

    pub async fn create_bank_account(&self, account: &BankAccount) -> ClientResult<BankAccount> {
        let request = Request::post("/bank-account").json(account)?;
        self.exchange::<BankAccountData>(request, CREATED).await
    }

    pub async fn update_bank_account(&self, account: &BankAccount) -> ClientResult<BankAccount> {
        let request = Request::put("/bank-account/-").json(account)?;
        self.exchange::<BankAccountData>(request, OK).await
    }

    pub async fn delete_bank_account(&self, account: Uuid) -> ClientResult<()> {
        let request = Request::delete("/bank-account/-").uuid(account);
        self.exchange_empty(request, OK).await
    }
}
