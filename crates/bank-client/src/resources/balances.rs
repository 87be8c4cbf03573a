use crate::envelope::AccountBalanceData;
use crate::error::ClientResult;
use crate::outcome::{CREATED, OK};
use crate::request::Request;
use crate::service::BankService;
use crate::transport::Transport;
use bank_core::{AccountBalance, Uuid};
use chrono::NaiveDate;

impl<T: Transport> BankService<T> {
    /// The balance of an account as at `date`
    pub async fn get_account_balance(
        &self,
        account: Uuid,
        date: NaiveDate,
    ) -> ClientResult<AccountBalance> {
        let request = Request::get("/account/-/balance")
            .uuid(account)
            .date("date", date);
        self.exchange::<AccountBalanceData>(request, OK).await
    }

    /// Record a balance for an account
    pub async fn create_account_balance(
        &self,
        balance: &AccountBalance,
    ) -> ClientResult<AccountBalance> {
        let request = Request::post("/account/-/balance").json(balance)?;
        self.exchange::<AccountBalanceData>(request, CREATED).await
    }
}
