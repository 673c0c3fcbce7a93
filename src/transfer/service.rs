//! Transfer execution

use super::error::TransferError;
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};
use utoipa::ToSchema;

/// Transfer request body (POST /api/send/)
///
/// Fields are optional so a missing field yields the same 400 as an
/// unresolvable one instead of a framework-level rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransferRequest {
    #[schema(example = 1)]
    pub sender_id: Option<i64>,
    #[schema(example = 2)]
    pub receiver_id: Option<i64>,
    #[schema(example = 40)]
    pub amount: Option<i64>,
}

pub struct TransferService;

impl TransferService {
    /// Execute a balance transfer between two users
    ///
    /// Preconditions are checked in order, first failure wins:
    /// sender resolves, receiver resolves, sender balance covers the amount.
    /// Both row updates and all precondition reads share one transaction,
    /// so a concurrent transfer touching either account cannot interleave
    /// between the balance check and the debit.
    ///
    /// Zero and negative amounts and self-transfers are deliberately not
    /// rejected; both still conserve total balance.
    ///
    /// On success the request is echoed back as the response body.
    pub async fn execute(
        pool: &SqlitePool,
        req: TransferRequest,
    ) -> Result<TransferRequest, TransferError> {
        let mut tx = pool.begin().await?;

        let sender_id = req.sender_id.ok_or(TransferError::InvalidSender)?;
        let sender_balance: i64 = sqlx::query(r#"SELECT balance FROM users WHERE id = ?"#)
            .bind(sender_id)
            .fetch_optional(&mut *tx)
            .await?
            .map(|r| r.get("balance"))
            .ok_or(TransferError::InvalidSender)?;

        let receiver_id = req.receiver_id.ok_or(TransferError::InvalidReceiver)?;
        let receiver_exists = sqlx::query(r#"SELECT id FROM users WHERE id = ?"#)
            .bind(receiver_id)
            .fetch_optional(&mut *tx)
            .await?
            .is_some();
        if !receiver_exists {
            return Err(TransferError::InvalidReceiver);
        }

        let amount = req.amount.ok_or(TransferError::MissingAmount)?;
        if sender_balance < amount {
            return Err(TransferError::InsufficientFunds);
        }

        // Debit sender
        sqlx::query(r#"UPDATE users SET balance = balance - ? WHERE id = ?"#)
            .bind(amount)
            .bind(sender_id)
            .execute(&mut *tx)
            .await?;

        // Credit receiver
        sqlx::query(r#"UPDATE users SET balance = balance + ? WHERE id = ?"#)
            .bind(amount)
            .bind(receiver_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            sender_id,
            receiver_id,
            amount,
            "transfer applied"
        );

        Ok(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::UserRepository;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite should connect");
        sqlx::query(crate::db::CREATE_USERS_TABLE)
            .execute(&pool)
            .await
            .expect("schema should create");
        pool
    }

    fn request(sender_id: i64, receiver_id: i64, amount: i64) -> TransferRequest {
        TransferRequest {
            sender_id: Some(sender_id),
            receiver_id: Some(receiver_id),
            amount: Some(amount),
        }
    }

    async fn balance(pool: &SqlitePool, id: i64) -> i64 {
        UserRepository::get_balance(pool, id).await.unwrap().unwrap()
    }

    #[tokio::test]
    async fn test_valid_transfer_conserves_total() {
        let pool = setup_pool().await;
        let alice = UserRepository::create(&pool, "Alice", "alice", 100)
            .await
            .unwrap();
        let bob = UserRepository::create(&pool, "Bob", "bob", 0).await.unwrap();

        let echoed = TransferService::execute(&pool, request(alice, bob, 40))
            .await
            .expect("transfer should succeed");
        assert_eq!(echoed.amount, Some(40));

        assert_eq!(balance(&pool, alice).await, 60);
        assert_eq!(balance(&pool, bob).await, 40);
    }

    #[tokio::test]
    async fn test_missing_sender_fails_first() {
        let pool = setup_pool().await;

        let req = TransferRequest {
            sender_id: None,
            receiver_id: None,
            amount: None,
        };
        let err = TransferService::execute(&pool, req).await.unwrap_err();
        assert!(matches!(err, TransferError::InvalidSender));
    }

    #[tokio::test]
    async fn test_unknown_sender_leaves_balances_unchanged() {
        let pool = setup_pool().await;
        let bob = UserRepository::create(&pool, "Bob", "bob", 10).await.unwrap();

        let err = TransferService::execute(&pool, request(999, bob, 5))
            .await
            .unwrap_err();
        assert!(matches!(err, TransferError::InvalidSender));
        assert_eq!(balance(&pool, bob).await, 10);
    }

    #[tokio::test]
    async fn test_unknown_receiver_leaves_balances_unchanged() {
        let pool = setup_pool().await;
        let alice = UserRepository::create(&pool, "Alice", "alice", 100)
            .await
            .unwrap();

        let err = TransferService::execute(&pool, request(alice, 999, 5))
            .await
            .unwrap_err();
        assert!(matches!(err, TransferError::InvalidReceiver));
        assert_eq!(balance(&pool, alice).await, 100);
    }

    #[tokio::test]
    async fn test_insufficient_funds_leaves_balances_unchanged() {
        let pool = setup_pool().await;
        let alice = UserRepository::create(&pool, "Alice", "alice", 60)
            .await
            .unwrap();
        let bob = UserRepository::create(&pool, "Bob", "bob", 40).await.unwrap();

        let err = TransferService::execute(&pool, request(alice, bob, 1000))
            .await
            .unwrap_err();
        assert!(matches!(err, TransferError::InsufficientFunds));
        assert_eq!(balance(&pool, alice).await, 60);
        assert_eq!(balance(&pool, bob).await, 40);
    }

    #[tokio::test]
    async fn test_zero_amount_is_a_permitted_noop() {
        let pool = setup_pool().await;
        let alice = UserRepository::create(&pool, "Alice", "alice", 0).await.unwrap();
        let bob = UserRepository::create(&pool, "Bob", "bob", 0).await.unwrap();

        TransferService::execute(&pool, request(alice, bob, 0))
            .await
            .expect("zero transfer is permitted");
        assert_eq!(balance(&pool, alice).await, 0);
        assert_eq!(balance(&pool, bob).await, 0);
    }

    #[tokio::test]
    async fn test_self_transfer_is_permitted_and_conserves() {
        let pool = setup_pool().await;
        let alice = UserRepository::create(&pool, "Alice", "alice", 50)
            .await
            .unwrap();

        TransferService::execute(&pool, request(alice, alice, 20))
            .await
            .expect("self transfer is permitted");
        assert_eq!(balance(&pool, alice).await, 50);
    }

    #[tokio::test]
    async fn test_missing_amount_rejected_after_id_checks() {
        let pool = setup_pool().await;
        let alice = UserRepository::create(&pool, "Alice", "alice", 50)
            .await
            .unwrap();
        let bob = UserRepository::create(&pool, "Bob", "bob", 0).await.unwrap();

        let req = TransferRequest {
            sender_id: Some(alice),
            receiver_id: Some(bob),
            amount: None,
        };
        let err = TransferService::execute(&pool, req).await.unwrap_err();
        assert!(matches!(err, TransferError::MissingAmount));
        assert_eq!(balance(&pool, alice).await, 50);
    }
}
