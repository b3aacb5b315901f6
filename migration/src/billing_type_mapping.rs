//! 旧サブスクリプションに紐づくパッケージを請求タイプへ付け替えるデータ移行
//!
//! `packages.billing_type_id` が追加された後、`packages.subscription_id` と
//! `subscriptions` テーブルが削除される前に一度だけ実行する。

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, TransactionTrait};

/// 旧サブスクリプション名 → 請求タイプ名
///
/// ここに無いサブスクリプションは廃止扱いとなり、そのパッケージは削除される。
pub const SUBSCRIPTION_TO_BILLING_TYPE: &[(&str, &str)] = &[
    ("DL-Budget", "Engineering Budget"),
    ("SLA Störungsbehebung", "SLA Incident Management"),
    ("Software Maintenance Abonnement", "Software Maintenance"),
    ("SySupport-Premium", "SSA Premium"),
    ("SySupport-Standard", "SSA Standard"),
];

/// パッケージを請求タイプへ付け替え、付け替えられなかったパッケージを削除する
///
/// 呼び出し側のトランザクション内で実行されることを前提とする。
/// マイグレーションランナーからはランナーの接続をそのまま渡す。
pub async fn migrate_packages<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    for &(subscription, billing_type) in SUBSCRIPTION_TO_BILLING_TYPE {
        if !exists(db, packages_of_subscription(subscription)).await? {
            tracing::debug!(subscription, "No packages reference subscription, skipping");
            continue;
        }

        let created = find_or_create_billing_type(db, billing_type).await?;
        let updated = db
            .execute(
                db.get_database_backend()
                    .build(&assign_billing_type_statement(subscription, billing_type)),
            )
            .await?
            .rows_affected();

        tracing::info!(
            subscription,
            billing_type,
            created,
            updated,
            "Packages mapped to billing type"
        );
    }

    // 請求タイプが付かなかったパッケージは廃止扱い
    let deleted = db
        .execute(
            db.get_database_backend()
                .build(&delete_unclassified_packages_statement()),
        )
        .await?
        .rows_affected();

    tracing::info!(deleted, "Obsolete packages deleted");

    Ok(())
}

/// 単独のトランザクションで [`migrate_packages`] を実行する
///
/// 途中でエラーになった場合はコミットせずにトランザクションを破棄するため、
/// 一部のパッケージだけが付け替えられた状態は残らない。
pub async fn migrate_packages_atomically<C>(db: &C) -> Result<(), DbErr>
where
    C: TransactionTrait,
{
    let txn = db.begin().await?;

    if let Err(e) = migrate_packages(&txn).await {
        tracing::error!(error = %e, "Package migration failed, rolling back");
        // ロールバック自体の失敗より元のエラーを返す
        if let Err(rollback_err) = txn.rollback().await {
            tracing::warn!(error = %rollback_err, "Rollback failed");
        }
        return Err(e);
    }

    txn.commit().await
}

/// 名前で請求タイプを検索し、無ければ作成する
///
/// 作成した場合は `true` を返す。同時に同名の行が作られた場合は
/// 一意制約違反としてエラーになる。
pub async fn find_or_create_billing_type<C>(db: &C, name: &str) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    let lookup = Query::select()
        .column(BillingTypes::Id)
        .from(BillingTypes::Table)
        .and_where(Expr::col(BillingTypes::Name).eq(name))
        .to_owned();

    if exists(db, lookup).await? {
        return Ok(false);
    }

    let insert = Query::insert()
        .into_table(BillingTypes::Table)
        .columns([BillingTypes::Id, BillingTypes::Name])
        .values_panic([Expr::cust("gen_random_uuid()"), name.into()])
        .to_owned();

    db.execute(db.get_database_backend().build(&insert)).await?;

    Ok(true)
}

async fn exists<C>(db: &C, select: SelectStatement) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    let stmt = Query::select()
        .expr_as(Expr::exists(select), Alias::new("exists"))
        .to_owned();

    match db.query_one(db.get_database_backend().build(&stmt)).await? {
        Some(row) => row.try_get("", "exists"),
        None => Ok(false),
    }
}

fn subscription_ids(subscription: &str) -> SelectStatement {
    Query::select()
        .column(Subscriptions::Id)
        .from(Subscriptions::Table)
        .and_where(Expr::col(Subscriptions::Name).eq(subscription))
        .to_owned()
}

fn packages_of_subscription(subscription: &str) -> SelectStatement {
    Query::select()
        .column(Packages::Id)
        .from(Packages::Table)
        .and_where(Expr::col(Packages::SubscriptionId).in_subquery(subscription_ids(subscription)))
        .to_owned()
}

fn assign_billing_type_statement(subscription: &str, billing_type: &str) -> UpdateStatement {
    let billing_type_id = Query::select()
        .column(BillingTypes::Id)
        .from(BillingTypes::Table)
        .and_where(Expr::col(BillingTypes::Name).eq(billing_type))
        .to_owned();

    // 既に請求タイプが設定されていても上書きする
    Query::update()
        .table(Packages::Table)
        .value(
            Packages::BillingTypeId,
            SimpleExpr::SubQuery(
                None,
                Box::new(SubQueryStatement::SelectStatement(billing_type_id)),
            ),
        )
        .and_where(Expr::col(Packages::SubscriptionId).in_subquery(subscription_ids(subscription)))
        .to_owned()
}

fn delete_unclassified_packages_statement() -> DeleteStatement {
    Query::delete()
        .from_table(Packages::Table)
        .and_where(Expr::col(Packages::BillingTypeId).is_null())
        .to_owned()
}

#[derive(DeriveIden)]
enum Packages {
    Table,
    Id,
    SubscriptionId,
    BillingTypeId,
}

#[derive(DeriveIden)]
enum Subscriptions {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum BillingTypes {
    Table,
    Id,
    Name,
}
