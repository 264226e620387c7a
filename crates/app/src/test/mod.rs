//! Test helpers: store rows as the hosted store returns them, and a mocked
//! application context.


pub(crate) use context::TestContext;

use atelier::{
    catalog::{GameUuid, InquiryUuid, InventoryItemUuid, Live2dModelUuid, PhotoUuid},
    orders::{OrderStatus, OrderUuid},
};
use serde_json::{Value, json};

use crate::store::{StoreError, errors::ErrorBody};

const CREATED_AT: &str = "2024-06-10T06:13:20.123456+00:00";

pub(crate) fn rejected(code: &str) -> StoreError {
    StoreError::Rejected {
        status: 409,
        body: ErrorBody {
            code: Some(code.to_string()),
            message: Some(format!("violation {code}")),
            ..ErrorBody::default()
        },
    }
}

pub(crate) fn photo_row(id: PhotoUuid, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": null,
        "category": "Landscape",
        "image_url": "https://cdn.example/photo.jpg",
        "created_at": CREATED_AT,
    })
}

pub(crate) fn inventory_row(
    id: InventoryItemUuid,
    photo: PhotoUuid,
    size: &str,
    quantity: u32,
    price: f64,
) -> Value {
    json!({
        "id": id,
        "photo_id": photo,
        "size": size,
        "material": "Fine Art Paper",
        "quantity": quantity,
        "price": price,
        "created_at": CREATED_AT,
    })
}

pub(crate) fn order_row(id: OrderUuid, number: &str, status: OrderStatus) -> Value {
    json!({
        "id": id,
        "order_number": number,
        "customer_name": "Mina Hart",
        "customer_email": "mina@example.com",
        "customer_phone": "555-0199",
        "items": [],
        "total_price": 95.0,
        "shipping_address": "12 Orchard Lane",
        "special_instructions": null,
        "status": status,
        "created_at": CREATED_AT,
        "updated_at": CREATED_AT,
    })
}

pub(crate) fn model_row(id: Live2dModelUuid, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "client": "Studio Kite",
        "type": "VTuber",
        "image_url": "https://cdn.example/model.png",
        "video_url": null,
        "features": "Face tracking, Physics",
        "rating": 5,
        "year": "2024",
        "created_at": CREATED_AT,
    })
}

pub(crate) fn game_row(id: GameUuid, title: &str, enabled: bool) -> Value {
    json!({
        "id": id,
        "title": title,
        "genre": "Puzzle",
        "description": "Lanterns and mirrors",
        "image_url": "https://cdn.example/game.png",
        "tech": ["Godot", "Rust"],
        "status": "Released",
        "year": "2023",
        "players": "Single Player",
        "is_enabled": enabled,
        "created_at": CREATED_AT,
    })
}

pub(crate) fn setting_row(key: &str, value: &str) -> Value {
    json!({
        "id": uuid::Uuid::now_v7(),
        "key": key,
        "value": value,
        "updated_at": CREATED_AT,
    })
}

pub(crate) fn inquiry_row(id: InquiryUuid, is_read: bool) -> Value {
    json!({
        "id": id,
        "name": "Ada Quill",
        "email": "ada@example.com",
        "message": "Do you shoot weddings?",
        "section": "photography",
        "created_at": CREATED_AT,
        "is_read": is_read,
    })
}
