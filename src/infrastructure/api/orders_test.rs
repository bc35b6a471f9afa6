use anyhow::Result;
use mockito::Matcher;
use serde_json::json;

use crate::domain::models::CartLine;
use crate::domain::models::OrderDraft;
use crate::domain::models::OrderPage;
use crate::domain::models::OrderStatus;
use crate::domain::models::PaymentMethod;
use crate::infrastructure::api::ApiClient;

mod cart {
    use super::*;

    #[tokio::test]
    async fn it_reads_the_cart() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/orders/cart")
            .with_status(200)
            .with_body(r#"{"items":[{"product_id":12,"quantity":1,"subtotal":349.0}],"total_price":349.0}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url(), None)?;
        let res = client.cart().await?;

        assert_eq!(res["total_price"], 349.0);
        mock.assert_async().await;

        return Ok(());
    }

    #[tokio::test]
    async fn it_adds_a_single_item_by_default() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/orders/cart/add")
            .match_body(Matcher::Json(json!({ "product_id": 12, "quantity": 1 })))
            .with_status(200)
            .with_body(r#"{"message":"Produit ajouté au panier"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url(), None)?;
        client.add_to_cart(CartLine::single(12)).await?;

        mock.assert_async().await;

        return Ok(());
    }

    #[tokio::test]
    async fn it_updates_quantities_with_put() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/orders/cart/update")
            .match_body(Matcher::Json(json!({ "product_id": 12, "quantity": 3 })))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = ApiClient::new(&server.url(), None)?;
        client
            .update_cart_item(CartLine {
                product_id: 12,
                quantity: 3,
            })
            .await?;

        mock.assert_async().await;

        return Ok(());
    }

    #[tokio::test]
    async fn it_removes_with_a_delete_body() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let remove = server
            .mock("DELETE", "/api/orders/cart/remove")
            .match_body(Matcher::Json(json!({ "product_id": 12 })))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;
        let clear = server
            .mock("DELETE", "/api/orders/cart/clear")
            .with_status(200)
            .with_body(r#"{"message":"Panier vidé"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url(), None)?;
        client.remove_from_cart(12).await?;
        client.clear_cart().await?;

        remove.assert_async().await;
        clear.assert_async().await;

        return Ok(());
    }
}

mod orders {
    use super::*;

    #[tokio::test]
    async fn it_creates_an_order_from_the_cart() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/orders/create")
            .match_body(Matcher::Json(json!({
                "shipping_address": "Rue 1.234, Bonapriso, Douala",
                "payment_method": "mtn_mobile_money",
            })))
            .with_status(201)
            .with_body(r#"{"orders":[{"id":5}]}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url(), None)?;
        let res = client
            .create_order(&OrderDraft {
                product_id: None,
                shipping_address: "Rue 1.234, Bonapriso, Douala".to_string(),
                payment_method: PaymentMethod::default(),
            })
            .await?;

        assert_eq!(res["orders"][0]["id"], 5);
        mock.assert_async().await;

        return Ok(());
    }

    #[tokio::test]
    async fn it_pages_orders_and_sales() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let orders = server
            .mock("GET", "/api/orders/my-orders")
            .match_query(Matcher::UrlEncoded("page".to_string(), "1".to_string()))
            .with_status(200)
            .with_body(r#"{"orders":[]}"#)
            .create_async()
            .await;
        let sales = server
            .mock("GET", "/api/orders/my-sales")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".to_string(), "3".to_string()),
                Matcher::UrlEncoded("status".to_string(), "shipped".to_string()),
            ]))
            .with_status(200)
            .with_body(r#"{"orders":[]}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url(), None)?;
        client.my_orders(&OrderPage::default()).await?;
        client
            .my_sales(&OrderPage {
                status: Some(OrderStatus::Shipped),
                page: 3,
            })
            .await?;

        orders.assert_async().await;
        sales.assert_async().await;

        return Ok(());
    }

    #[tokio::test]
    async fn it_fetches_and_updates_an_order() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let show = server
            .mock("GET", "/api/orders/5")
            .with_status(200)
            .with_body(r#"{"id":5,"status":"pending"}"#)
            .create_async()
            .await;
        let update = server
            .mock("PUT", "/api/orders/5/status")
            .match_body(Matcher::Json(json!({ "order_id": 5, "status": "confirmed" })))
            .with_status(200)
            .with_body(r#"{"id":5,"status":"confirmed"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url(), None)?;

        let res = client.order(5).await?;
        assert_eq!(res["status"], "pending");

        let res = client.update_order_status(5, OrderStatus::Confirmed).await?;
        assert_eq!(res["status"], "confirmed");

        show.assert_async().await;
        update.assert_async().await;

        return Ok(());
    }
}
