// tests/common/mod.rs

//! Back-end falso em processo para os testes de integração.
//!
//! Sobe um `axum::Router` em `127.0.0.1:0` com as rotas que a biblioteca
//! consome. O estado fica num `Mutex` compartilhado para que os testes
//! possam semear dados, injetar falhas e inspecionar as chamadas recebidas.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use bax_backoffice::{
    config::{AppConfig, AppState},
    models::auth::SessionUser,
    session::SessionContext,
};

pub const USER_ID: i64 = 5;
pub const PASSWORD: &str = "secreta123";
pub const TEMPLATE_BYTES: &[u8] = b"PK\x03\x04plantilla";

type Shared = Arc<Mutex<FakeState>>;

#[derive(Debug, Clone)]
pub struct FakeRequest {
    pub id: i64,
    pub client_id: i64,
    pub user_id: i64,
    pub date: String,
    pub state: String,
    pub items: Vec<FakeItem>,
}

#[derive(Debug, Clone)]
pub struct FakeItem {
    pub id: i64,
    pub product_code: String,
    pub quantity: u64,
    pub note: String,
}

#[derive(Debug, Default)]
pub struct FakeState {
    pub clients: Vec<Value>,
    pub products: Vec<Value>,
    pub units: Vec<Value>,
    pub employees: Vec<Value>,
    pub users: Vec<Value>,
    pub requests: HashMap<i64, FakeRequest>,
    next_id: i64,

    // chamadas recebidas
    pub create_bodies: Vec<Value>,
    pub force_bodies: Vec<Value>,
    pub line_item_posts: Vec<Value>,
    pub line_item_puts: Vec<(i64, Value)>,
    pub send_calls: Vec<i64>,
    pub generate_calls: Vec<i64>,
    pub imports: Vec<Value>,
    pub status_changes: Vec<(String, Value)>,
    pub deleted_clients: Vec<i64>,
    pub deleted_users: Vec<i64>,

    // comportamento configurável
    pub pdfs: HashSet<i64>,
    /// Número (1-based) da chamada de inclusão de item que deve falhar.
    pub fail_line_item_post_at: Option<usize>,
    /// Número (1-based) da chamada de atualização de item que deve falhar.
    pub fail_line_item_put_at: Option<usize>,
    /// Corpo devolvido com 409 na próxima criação.
    pub duplicate: Option<Value>,
    /// Estado devolvido na criação (padrão: Pendiente).
    pub create_state: Option<String>,
    pub send_delay: Option<Duration>,
    /// A sonda `HEAD /pdf` responde 500.
    pub pdf_probe_fails: bool,
    /// A listagem por usuário responde 500.
    pub fail_list_by_user: bool,
}

impl FakeState {
    pub fn seeded() -> Self {
        Self {
            clients: vec![
                json!({ "id": 7, "nombre_razon_social": "Ferretería Sur", "documento": "20123456789",
                        "direccion": "Av. Grau 123", "telefono": "987654321", "estado": "Activo" }),
                json!({ "id": 8, "nombre_razon_social": "Constructora Norte", "documento": "12345678",
                        "direccion": "Jr. Lima 45", "telefono": "912345678", "estado": "Activo" }),
            ],
            products: vec![
                product("1001", "Cemento", "Bolsa", "Activo"),
                product("1002", "Arena", "m3", "Activo"),
                product("1003", "Ladrillo", "Unidad", "Activo"),
                product("2001", "Fierro", "Unidad", "Inactivo"),
            ],
            units: vec![
                json!({ "id": 1, "nombre": "Bolsa" }),
                json!({ "id": 2, "nombre": "m3" }),
                json!({ "id": 3, "nombre": "Unidad" }),
            ],
            employees: vec![
                employee(1, "12345678", "Ana", "Perez", "Vendedor", "Activo"),
                employee(2, "87654321", "Luis", "Gomez", "Almacenero", "Inactivo"),
                employee(3, "11223344", "Carla", "Diaz", "Vendedor", "Activo"),
            ],
            users: vec![
                json!({ "id": 1, "nombre": "Ana", "correo_electronico": "ana@bax.pe", "rol": "Vendedor" }),
                json!({ "id": 2, "nombre": "Luis", "correo_electronico": "luis@bax.pe", "rol": "Almacenero" }),
            ],
            next_id: 100,
            ..Default::default()
        }
    }

    /// Semeia uma solicitação com itens `(código, quantidade)`.
    pub fn seed_request(&mut self, state: &str, client_id: i64, date: &str, items: &[(&str, u64)]) -> i64 {
        let id = self.next();
        let items = items
            .iter()
            .map(|(code, quantity)| FakeItem {
                id: self.next(),
                product_code: code.to_string(),
                quantity: *quantity,
                note: String::new(),
            })
            .collect();

        self.requests.insert(
            id,
            FakeRequest {
                id,
                client_id,
                user_id: USER_ID,
                date: date.to_string(),
                state: state.to_string(),
                items,
            },
        );
        id
    }

    fn next(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn client_name(&self, id: i64) -> String {
        self.clients
            .iter()
            .find(|c| c["id"] == id)
            .and_then(|c| c["nombre_razon_social"].as_str())
            .unwrap_or_default()
            .to_string()
    }

    fn product_name(&self, code: &str) -> String {
        self.products
            .iter()
            .find(|p| p["codigo"] == code)
            .and_then(|p| p["nombre"].as_str())
            .unwrap_or_default()
            .to_string()
    }

    fn header(&self, r: &FakeRequest) -> Value {
        json!({
            "id": r.id,
            "cliente_id": r.client_id,
            "usuario_id": r.user_id,
            "fecha": r.date,
            "estado": r.state,
            "version": 1,
        })
    }

    fn summary(&self, r: &FakeRequest) -> Value {
        json!({
            "id": r.id,
            "cliente": self.client_name(r.client_id),
            "fecha": r.date,
            "estado": r.state,
            "version": 1,
        })
    }

    fn detail(&self, r: &FakeRequest) -> Value {
        let items: Vec<Value> = r
            .items
            .iter()
            .map(|i| {
                json!({
                    "detalle_id": i.id,
                    "producto_codigo": i.product_code,
                    "nombre": self.product_name(&i.product_code),
                    "cantidad": i.quantity,
                    "observacion": i.note,
                })
            })
            .collect();

        json!({
            "id": r.id,
            "estado": r.state,
            "cliente": self.client_name(r.client_id),
            "fecha": r.date,
            "version": 1,
            "detalles": items,
        })
    }
}

fn product(code: &str, name: &str, unit: &str, status: &str) -> Value {
    json!({ "codigo": code, "nombre": name, "descripcion": format!("{name} de obra"),
            "unidad_medida": unit, "estado": status })
}

fn employee(id: i64, dni: &str, first: &str, last: &str, role: &str, status: &str) -> Value {
    json!({ "id": id, "dni": dni, "nombres": first, "apellidos": last, "cargo": role, "estado": status })
}

// =============================================================================
//  SERVIDOR
// =============================================================================

pub struct FakeBackend {
    pub base_url: String,
    state: Shared,
}

impl FakeBackend {
    pub async fn start() -> Self {
        Self::start_with(FakeState::seeded()).await
    }

    pub async fn start_with(state: FakeState) -> Self {
        let state = Arc::new(Mutex::new(state));
        let app = router(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn config(&self) -> AppConfig {
        AppConfig {
            api_base_url: self.base_url.clone(),
            session_file: ".bax/test-session.json".into(),
            import_template_url: format!("{}/plantilla-productos.xlsx", self.base_url),
        }
    }

    /// Estado da aplicação sem sessão.
    pub fn app(&self) -> AppState {
        AppState::with_config(self.config(), SessionContext::in_memory())
    }

    /// Estado da aplicação com o usuário de teste já logado.
    pub async fn logged_in(&self) -> AppState {
        let app = self.app();
        app.session.set(session_user(USER_ID)).await.unwrap();
        app
    }
}

pub fn session_user(id: i64) -> SessionUser {
    SessionUser {
        id,
        name: "Ana".to_string(),
        role: "Vendedor".to_string(),
        email: Some("ana@bax.pe".to_string()),
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/clientes", get(list_clients).post(create_client))
        .route(
            "/api/clientes/{id}",
            get(get_client).put(update_client).delete(delete_client),
        )
        .route("/api/unidades", get(list_units))
        .route("/api/productos", get(catalog).post(create_product))
        .route("/api/productos/activos", get(active_products))
        .route("/api/productos/buscar", get(find_product))
        .route("/api/productos/importar-productos", post(import_products))
        .route("/api/productos/estado/{codigo}", put(set_product_status))
        .route("/api/productos/{codigo}", put(update_product))
        .route("/api/productos/{codigo}/inactivar", patch(inactivate_product))
        .route("/empleados", get(list_employees).post(create_employee))
        .route("/empleados/{id}", put(update_employee))
        .route("/empleados/estado/{id}", patch(set_employee_status))
        .route("/api/usuarios", get(list_users).post(create_user))
        .route("/api/usuarios/{id}", put(update_user).delete(delete_user))
        .route("/api/solicitudes", post(create_request))
        .route("/api/solicitudes/forzar", post(force_request))
        .route("/api/solicitudes/historial", get(history))
        .route("/api/solicitudes/usuario/{uid}", get(list_by_user))
        .route("/api/solicitudes/detalle", post(add_line_item))
        .route("/api/solicitudes/detalle/{id}", put(update_line_item))
        .route("/api/solicitudes/{id}", get(request_detail))
        .route("/api/solicitudes/{id}/enviar", post(send_request))
        .route("/api/solicitudes/{id}/generar-pdf", post(generate_pdf))
        .route("/api/solicitudes/{id}/pdf", get(get_pdf))
        .route("/plantilla-productos.xlsx", get(template))
        .with_state(state)
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

// ---- auth ----

async fn login(Json(body): Json<Value>) -> Response {
    if body["contrasena"] != PASSWORD {
        return error(StatusCode::UNAUTHORIZED, "Credenciales inválidas");
    }
    Json(json!({
        "usuario": {
            "id": USER_ID,
            "nombre": "Ana",
            "rol": "Vendedor",
            "correo_electronico": body["correo_electronico"],
        }
    }))
    .into_response()
}

// ---- clientes ----

async fn list_clients(State(state): State<Shared>) -> Json<Value> {
    Json(Value::Array(state.lock().unwrap().clients.clone()))
}

async fn get_client(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let st = state.lock().unwrap();
    match st.clients.iter().find(|c| c["id"] == id) {
        Some(c) => Json(c.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Cliente no encontrado"),
    }
}

async fn create_client(State(state): State<Shared>, Json(mut body): Json<Value>) -> Response {
    let mut st = state.lock().unwrap();
    body["id"] = json!(st.next());
    st.clients.push(body);
    (StatusCode::CREATED, Json(json!({ "success": true }))).into_response()
}

async fn update_client(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut st = state.lock().unwrap();
    let Some(client) = st.clients.iter_mut().find(|c| c["id"] == id) else {
        return error(StatusCode::NOT_FOUND, "Cliente no encontrado");
    };
    for key in ["nombre_razon_social", "direccion", "telefono"] {
        client[key] = body[key].clone();
    }
    Json(json!({ "mensaje": "Cliente actualizado" })).into_response()
}

async fn delete_client(State(state): State<Shared>, Path(id): Path<i64>) -> StatusCode {
    let mut st = state.lock().unwrap();
    st.clients.retain(|c| c["id"] != id);
    st.deleted_clients.push(id);
    StatusCode::NO_CONTENT
}

// ---- produtos ----

async fn list_units(State(state): State<Shared>) -> Json<Value> {
    Json(Value::Array(state.lock().unwrap().units.clone()))
}

async fn catalog(State(state): State<Shared>) -> Json<Value> {
    let st = state.lock().unwrap();
    if st.products.is_empty() {
        return Json(json!({ "mensaje": "No hay productos registrados" }));
    }
    Json(Value::Array(st.products.clone()))
}

async fn active_products(State(state): State<Shared>) -> Json<Value> {
    let st = state.lock().unwrap();
    Json(Value::Array(
        st.products.iter().filter(|p| p["estado"] == "Activo").cloned().collect(),
    ))
}

#[derive(Deserialize)]
struct Criteria {
    criterio: String,
}

async fn find_product(State(state): State<Shared>, Query(q): Query<Criteria>) -> Response {
    let st = state.lock().unwrap();
    match st.products.iter().find(|p| p["codigo"] == q.criterio.as_str()) {
        Some(p) => Json(p.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Producto no encontrado"),
    }
}

async fn create_product(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut st = state.lock().unwrap();
    if st.products.iter().any(|p| p["codigo"] == body["codigo"]) {
        return error(StatusCode::CONFLICT, "El código ya existe");
    }
    let unit = st
        .units
        .iter()
        .find(|u| u["id"] == body["unidad_medida_id"])
        .map(|u| u["nombre"].clone())
        .unwrap_or(Value::Null);
    st.products.push(json!({
        "codigo": body["codigo"],
        "nombre": body["nombre"],
        "descripcion": body["descripcion"],
        "unidad_medida": unit,
        "estado": body["estado"],
    }));
    (StatusCode::CREATED, Json(json!({ "mensaje": "Producto registrado" }))).into_response()
}

async fn update_product(
    State(state): State<Shared>,
    Path(codigo): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut st = state.lock().unwrap();
    let unit = st
        .units
        .iter()
        .find(|u| u["id"] == body["unidad_medida_id"])
        .map(|u| u["nombre"].clone())
        .unwrap_or(Value::Null);
    let Some(p) = st.products.iter_mut().find(|p| p["codigo"] == codigo.as_str()) else {
        return error(StatusCode::NOT_FOUND, "Producto no encontrado");
    };
    p["nombre"] = body["nombre"].clone();
    p["descripcion"] = body["descripcion"].clone();
    p["unidad_medida"] = unit;
    Json(json!({ "mensaje": "Producto actualizado" })).into_response()
}

async fn set_product_status(
    State(state): State<Shared>,
    Path(codigo): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut st = state.lock().unwrap();
    st.status_changes.push((codigo.clone(), body.clone()));
    if let Some(p) = st.products.iter_mut().find(|p| p["codigo"] == codigo.as_str()) {
        p["estado"] = body["estado"].clone();
    }
    Json(json!({ "mensaje": "Estado actualizado" })).into_response()
}

async fn inactivate_product(State(state): State<Shared>, Path(codigo): Path<String>) -> Response {
    let mut st = state.lock().unwrap();
    let Some(p) = st.products.iter_mut().find(|p| p["codigo"] == codigo.as_str()) else {
        return error(StatusCode::NOT_FOUND, "Producto no encontrado");
    };
    p["estado"] = json!("Inactivo");
    Json(json!({ "mensaje": "Producto inactivado" })).into_response()
}

async fn import_products(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut st = state.lock().unwrap();
    st.imports.push(body.clone());
    if body["nombreArchivo"].as_str().unwrap_or_default().contains("errores") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "errores": ["Fila 2: código duplicado", "Fila 5: unidad desconocida"] })),
        )
            .into_response();
    }
    Json(json!({ "mensaje": "3 productos importados" })).into_response()
}

async fn template() -> Response {
    (
        [(header::CONTENT_TYPE, "application/vnd.ms-excel")],
        TEMPLATE_BYTES,
    )
        .into_response()
}

// ---- empleados ----

async fn list_employees(State(state): State<Shared>) -> Json<Value> {
    Json(Value::Array(state.lock().unwrap().employees.clone()))
}

async fn create_employee(State(state): State<Shared>, Json(mut body): Json<Value>) -> Response {
    let mut st = state.lock().unwrap();
    if st.employees.iter().any(|e| e["dni"] == body["dni"]) {
        return error(StatusCode::CONFLICT, "El DNI ya está registrado");
    }
    body["id"] = json!(st.next());
    st.employees.push(body);
    (StatusCode::CREATED, Json(json!({ "mensaje": "Empleado registrado" }))).into_response()
}

async fn update_employee(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut st = state.lock().unwrap();
    let Some(e) = st.employees.iter_mut().find(|e| e["id"] == id) else {
        return error(StatusCode::NOT_FOUND, "Empleado no encontrado");
    };
    for key in ["nombres", "apellidos", "cargo", "estado"] {
        e[key] = body[key].clone();
    }
    Json(json!({ "mensaje": "Empleado actualizado" })).into_response()
}

async fn set_employee_status(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut st = state.lock().unwrap();
    let Some(e) = st.employees.iter_mut().find(|e| e["id"] == id) else {
        return error(StatusCode::NOT_FOUND, "Empleado no encontrado");
    };
    e["estado"] = body["estado"].clone();
    Json(json!({ "mensaje": "Estado actualizado" })).into_response()
}

// ---- usuarios ----

async fn list_users(State(state): State<Shared>) -> Json<Value> {
    Json(Value::Array(state.lock().unwrap().users.clone()))
}

async fn create_user(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut st = state.lock().unwrap();
    let name = st
        .employees
        .iter()
        .find(|e| e["id"] == body["empleado_id"])
        .map(|e| e["nombres"].clone())
        .unwrap_or(Value::Null);
    let id = st.next();
    st.users.push(json!({
        "id": id,
        "nombre": name,
        "correo_electronico": body["correo_electronico"],
        "rol": body["rol"],
    }));
    (StatusCode::CREATED, Json(json!({ "mensaje": "Usuario registrado" }))).into_response()
}

async fn update_user(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut st = state.lock().unwrap();
    let Some(u) = st.users.iter_mut().find(|u| u["id"] == id) else {
        return error(StatusCode::NOT_FOUND, "Usuario no encontrado");
    };
    u["correo_electronico"] = body["correo_electronico"].clone();
    u["rol"] = body["rol"].clone();
    Json(json!({ "mensaje": "Usuario actualizado" })).into_response()
}

async fn delete_user(State(state): State<Shared>, Path(id): Path<i64>) -> StatusCode {
    let mut st = state.lock().unwrap();
    st.users.retain(|u| u["id"] != id);
    st.deleted_users.push(id);
    StatusCode::OK
}

// ---- solicitudes ----

fn insert_request(st: &mut FakeState, body: &Value, state: String) -> Value {
    let id = st.next();
    let request = FakeRequest {
        id,
        client_id: body["cliente_id"].as_i64().unwrap_or_default(),
        user_id: body["usuario_id"].as_i64().unwrap_or_default(),
        date: body["fecha"].as_str().unwrap_or_default().to_string(),
        state,
        items: Vec::new(),
    };
    let header = st.header(&request);
    st.requests.insert(id, request);
    header
}

async fn create_request(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut st = state.lock().unwrap();
    st.create_bodies.push(body.clone());

    if let Some(dup) = st.duplicate.clone() {
        return (StatusCode::CONFLICT, Json(dup)).into_response();
    }

    let initial = st.create_state.clone().unwrap_or_else(|| "Pendiente".to_string());
    let header = insert_request(&mut st, &body, initial);
    (StatusCode::CREATED, Json(header)).into_response()
}

async fn force_request(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut st = state.lock().unwrap();
    st.force_bodies.push(body.clone());
    let header = insert_request(&mut st, &body, "Pendiente".to_string());
    (StatusCode::CREATED, Json(header)).into_response()
}

async fn request_detail(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let st = state.lock().unwrap();
    match st.requests.get(&id) {
        Some(r) => Json(st.detail(r)).into_response(),
        None => error(StatusCode::NOT_FOUND, "Solicitud no encontrada"),
    }
}

async fn list_by_user(State(state): State<Shared>, Path(uid): Path<i64>) -> Response {
    let st = state.lock().unwrap();
    if st.fail_list_by_user {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Error al listar las solicitudes");
    }
    let mut rows: Vec<&FakeRequest> = st.requests.values().filter(|r| r.user_id == uid).collect();
    rows.sort_by_key(|r| r.id);
    Json(Value::Array(rows.into_iter().map(|r| st.summary(r)).collect())).into_response()
}

#[derive(Deserialize)]
struct HistoryQuery {
    usuario_id: i64,
}

async fn history(State(state): State<Shared>, Query(q): Query<HistoryQuery>) -> Json<Value> {
    let st = state.lock().unwrap();
    let mut rows: Vec<&FakeRequest> = st
        .requests
        .values()
        .filter(|r| r.user_id == q.usuario_id)
        .collect();
    rows.sort_by_key(|r| r.id);
    Json(Value::Array(
        rows.into_iter()
            .map(|r| {
                let mut row = st.summary(r);
                row["ultima_actualizacion"] = json!("2024-05-02T10:00:00Z");
                row["ajustada"] = json!(false);
                row
            })
            .collect(),
    ))
}

async fn add_line_item(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut st = state.lock().unwrap();
    st.line_item_posts.push(body.clone());
    let call = st.line_item_posts.len();

    if st.fail_line_item_post_at == Some(call) {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Error al registrar el detalle");
    }

    let request_id = body["solicitud_id"].as_i64().unwrap_or_default();
    let item_id = st.next();
    let Some(request) = st.requests.get_mut(&request_id) else {
        return error(StatusCode::NOT_FOUND, "Solicitud no encontrada");
    };
    if request.state != "Pendiente" {
        return error(StatusCode::CONFLICT, "La solicitud no está pendiente");
    }
    request.items.push(FakeItem {
        id: item_id,
        product_code: body["producto_codigo"].as_str().unwrap_or_default().to_string(),
        quantity: body["cantidad"].as_u64().unwrap_or_default(),
        note: body["observacion"].as_str().unwrap_or_default().to_string(),
    });
    (StatusCode::CREATED, Json(json!({ "message": "Detalle agregado" }))).into_response()
}

async fn update_line_item(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut st = state.lock().unwrap();
    st.line_item_puts.push((id, body.clone()));
    let call = st.line_item_puts.len();

    if st.fail_line_item_put_at == Some(call) {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Error al actualizar el detalle");
    }

    let item = st
        .requests
        .values_mut()
        .flat_map(|r| r.items.iter_mut())
        .find(|i| i.id == id);
    let Some(item) = item else {
        return error(StatusCode::NOT_FOUND, "Detalle no encontrado");
    };
    item.quantity = body["cantidad"].as_u64().unwrap_or_default();
    item.note = body["observacion"].as_str().unwrap_or_default().to_string();
    Json(json!({ "message": "Detalle actualizado" })).into_response()
}

async fn send_request(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let delay = {
        let mut st = state.lock().unwrap();
        st.send_calls.push(id);
        st.send_delay
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let mut st = state.lock().unwrap();
    let Some(request) = st.requests.get_mut(&id) else {
        return error(StatusCode::NOT_FOUND, "Solicitud no encontrada");
    };
    if request.state != "Pendiente" {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "message": "La solicitud ya fue enviada" })),
        )
            .into_response();
    }
    request.state = "Enviada".to_string();
    Json(json!({ "message": "Solicitud enviada" })).into_response()
}

async fn generate_pdf(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut st = state.lock().unwrap();
    if !st.requests.contains_key(&id) {
        return error(StatusCode::NOT_FOUND, "Solicitud no encontrada");
    }
    st.generate_calls.push(id);
    st.pdfs.insert(id);
    Json(json!({ "message": "PDF generado" })).into_response()
}

async fn get_pdf(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let st = state.lock().unwrap();
    if st.pdf_probe_fails {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if !st.pdfs.contains(&id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    ([(header::CONTENT_TYPE, "application/pdf")], b"%PDF-1.4".as_slice()).into_response()
}
