// src/screens/line_item_editor.rs

use crate::{
    common::{
        error::{Alert, AppError},
        input::{parse_quantity, NumericInput},
    },
    models::{
        product::Product,
        request::{NewLineItem, RequestState},
    },
    screens::Route,
    services::{request_service::ensure_editable, ProductService, RequestService},
};

/// Item ainda não gravado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub product_code: String,
    pub product_name: String,
    pub quantity: u64,
    pub note: String,
}

/// Inclusão de produtos numa solicitação pendente.
pub struct LineItemEditor {
    service: RequestService,
    request_id: i64,
    state: RequestState,
    products: Vec<Product>,
    candidates: Vec<Candidate>,
    pub quantity: NumericInput,
}

impl LineItemEditor {
    pub async fn open(
        requests: &RequestService,
        products: &ProductService,
        request_id: i64,
    ) -> Result<Self, AppError> {
        let detail = requests.detail(request_id).await?;

        // Bloqueada: nem carrega o catálogo
        let products = if detail.state.is_editable() {
            products.list_active().await?
        } else {
            Vec::new()
        };

        Ok(Self {
            service: requests.clone(),
            request_id,
            state: detail.state,
            products,
            candidates: Vec::new(),
            quantity: NumericInput::new(),
        })
    }

    pub fn request_id(&self) -> i64 {
        self.request_id
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        !self.state.is_editable()
    }

    pub fn redirect(&self) -> Option<(Alert, Route)> {
        self.is_locked().then(|| {
            (
                Alert::new(
                    "Aviso",
                    format!(
                        "La solicitud está {} y no acepta nuevos productos.",
                        self.state
                    ),
                ),
                Route::RequestLister,
            )
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn add_candidate(
        &mut self,
        code: Option<&str>,
        quantity: &str,
        note: &str,
    ) -> Result<(), AppError> {
        ensure_editable(self.request_id, self.state)?;

        let quantity = parse_quantity(quantity)?;
        let code = code
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| AppError::InvalidInput("Seleccione un producto.".to_string()))?;

        let product = self
            .products
            .iter()
            .find(|p| p.code == code)
            .ok_or_else(|| AppError::InvalidInput("Producto no encontrado.".to_string()))?;

        if self.candidates.iter().any(|c| c.product_code == code) {
            return Err(AppError::DuplicateLineItem(code.to_string()));
        }

        self.candidates.push(Candidate {
            product_code: product.code.clone(),
            product_name: product.name.clone(),
            quantity,
            note: note.trim().to_string(),
        });
        Ok(())
    }

    /// Usa o valor atual do campo de quantidade e limpa o campo em seguida.
    pub fn add_from_input(&mut self, code: Option<&str>, note: &str) -> Result<(), AppError> {
        let quantity = self.quantity.value().to_string();
        self.add_candidate(code, &quantity, note)?;
        self.quantity.clear();
        Ok(())
    }

    pub fn remove_candidate(&mut self, code: &str) -> bool {
        let before = self.candidates.len();
        self.candidates.retain(|c| c.product_code != code);
        self.candidates.len() != before
    }

    /// Grava os candidatos em sequência. Em falha parcial a lista é mantida.
    pub async fn save(&mut self) -> Result<Route, AppError> {
        ensure_editable(self.request_id, self.state)?;
        if self.candidates.is_empty() {
            return Err(AppError::InvalidInput(
                "Agregue al menos un producto.".to_string(),
            ));
        }

        let items: Vec<NewLineItem> = self
            .candidates
            .iter()
            .map(|c| NewLineItem {
                request_id: self.request_id,
                product_code: c.product_code.clone(),
                quantity: c.quantity,
                note: c.note.clone(),
            })
            .collect();

        self.service.add_line_items(&items).await?;
        self.candidates.clear();
        Ok(Route::RequestLister)
    }
}
