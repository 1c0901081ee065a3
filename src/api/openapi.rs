//! Self-describing OpenAPI 3.0 document, published at `/api-docs`.

use axum::Json;
use serde_json::{Value, json};

use crate::db::models::CreditRecordInput;
use crate::db::query::{SEARCHABLE_COLUMNS, SortField};

/// GET /api-docs -> the API contract as an OpenAPI 3.0 JSON document.
pub async fn api_docs() -> Json<Value> {
    Json(document())
}

fn document() -> Value {
    let sortable: Vec<&str> = [
        SortField::Id,
        SortField::LimitBalance,
        SortField::Sex,
        SortField::Education,
        SortField::Marriage,
        SortField::Age,
        SortField::DefaultNextMonth,
    ]
    .iter()
    .map(|f| f.column())
    .collect();

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Credit Default API",
            "version": "1.0.0",
            "description": "API for managing the credit_default table",
        },
        "paths": {
            "/credits": {
                "get": {
                    "summary": "List credit records with search, filter, sort, and pagination",
                    "parameters": [
                        {
                            "name": "search",
                            "in": "query",
                            "schema": { "type": "string" },
                            "description": format!(
                                "Case-insensitive substring match across {}",
                                SEARCHABLE_COLUMNS.join(", ")
                            ),
                        },
                        { "name": "min_balance", "in": "query", "schema": { "type": "number" } },
                        { "name": "max_balance", "in": "query", "schema": { "type": "number" } },
                        {
                            "name": "sort_by",
                            "in": "query",
                            "schema": { "type": "string", "enum": sortable },
                        },
                        {
                            "name": "order",
                            "in": "query",
                            "schema": { "type": "string" },
                            "description": "Descending only for the exact token `desc`",
                        },
                        { "name": "page", "in": "query", "schema": { "type": "integer", "minimum": 1 } },
                        { "name": "limit", "in": "query", "schema": { "type": "integer", "minimum": 1 } },
                    ],
                    "responses": {
                        "200": { "description": "Matching records as a JSON array" },
                        "400": { "description": "Invalid sort field or malformed parameter" },
                    },
                },
            },
            "/credit": {
                "post": {
                    "summary": "Create a new credit record",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": {
                            "schema": { "$ref": "#/components/schemas/CreditRecordInput" },
                        } },
                    },
                    "responses": {
                        "201": { "description": "Created record, including the assigned id" },
                        "400": { "description": "Missing required field" },
                    },
                },
            },
            "/credit/{id}": {
                "get": {
                    "summary": "Get a single credit record by ID",
                    "responses": {
                        "200": { "description": "The record" },
                        "404": { "description": "Record not found" },
                    },
                },
                "put": {
                    "summary": "Partially update a credit record by ID",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": {
                            "schema": { "$ref": "#/components/schemas/CreditRecordInput" },
                        } },
                    },
                    "responses": {
                        "200": { "description": "The updated record" },
                        "400": { "description": "No fields to update" },
                        "404": { "description": "Record not found" },
                    },
                },
                "delete": {
                    "summary": "Delete a credit record by ID",
                    "responses": {
                        "200": { "description": "Deletion confirmation" },
                        "404": { "description": "Record not found" },
                    },
                },
            },
        },
        "components": {
            "schemas": {
                "CreditRecordInput": {
                    "type": "object",
                    "required": CreditRecordInput::REQUIRED,
                    "properties": {
                        "limit_balance": { "type": "number" },
                        "sex": { "type": "integer" },
                        "education": { "type": "integer" },
                        "marriage": { "type": "integer" },
                        "age": { "type": "integer" },
                        "pay_0": { "type": "integer" },
                        "pay_2": { "type": "integer" },
                        "pay_3": { "type": "integer" },
                        "pay_4": { "type": "integer" },
                        "pay_5": { "type": "integer" },
                        "pay_6": { "type": "integer" },
                        "bill_amt1": { "type": "number" },
                        "bill_amt2": { "type": "number" },
                        "bill_amt3": { "type": "number" },
                        "bill_amt4": { "type": "number" },
                        "bill_amt5": { "type": "number" },
                        "bill_amt6": { "type": "number" },
                        "pay_amt1": { "type": "number" },
                        "pay_amt2": { "type": "number" },
                        "pay_amt3": { "type": "number" },
                        "pay_amt4": { "type": "number" },
                        "pay_amt5": { "type": "number" },
                        "pay_amt6": { "type": "number" },
                        "default_next_month": { "type": "integer" },
                    },
                },
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_route() {
        let doc = document();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/credits"));
        assert!(paths.contains_key("/credit"));
        assert!(paths.contains_key("/credit/{id}"));
        assert_eq!(
            doc["components"]["schemas"]["CreditRecordInput"]["required"],
            json!(["limit_balance", "sex", "education", "marriage", "age"])
        );
    }
}
