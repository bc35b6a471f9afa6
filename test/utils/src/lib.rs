pub fn new_messages_fixture() -> &'static str {
    return r#"
{
  "new_messages": [
    {
      "id": 41,
      "sender_id": 7,
      "receiver_id": 3,
      "product_id": 12,
      "content": "Bonjour, est-ce encore dispo ?",
      "is_read": false,
      "created_at": "2024-03-01T10:14:02.000000",
      "sender": { "id": 7, "username": "amina", "first_name": "Amina" }
    },
    {
      "id": 42,
      "sender_id": 9,
      "receiver_id": 3,
      "product_id": null,
      "content": "Je passe demain.",
      "is_read": false,
      "created_at": "2024-03-01T10:14:45.000000",
      "sender": { "id": 9, "username": "kofi", "first_name": "Kofi" }
    }
  ],
  "count": 2,
  "timestamp": "2024-03-01T10:15:00.123456"
}
"#
    .trim();
}

pub fn product_list_fixture() -> &'static str {
    return r#"
{
  "products": [
    {
      "id": 12,
      "title": "iPhone 12 64 Go",
      "price": 349.0,
      "condition": "bon",
      "location": "Douala",
      "brand": "Apple"
    },
    {
      "id": 15,
      "title": "Canapé trois places",
      "price": 1250.5,
      "condition": "neuf",
      "location": "Yaoundé",
      "brand": null
    },
    {
      "id": 18,
      "title": "Vélo enfant",
      "price": 45.0,
      "condition": "usé",
      "location": null,
      "brand": null
    }
  ],
  "pagination": {
    "page": 1,
    "per_page": 20,
    "total": 3,
    "pages": 1,
    "has_next": false,
    "has_prev": false
  }
}
"#
    .trim();
}
