// src/screens/products.rs

use std::path::Path;

use crate::{
    common::error::{Alert, AppError},
    models::product::{
        CreateProductPayload, Product, ProductStatus, UnitOfMeasure, UpdateProductPayload,
    },
    screens::{contains_ignore_case, Route},
    services::ProductService,
};

// =============================================================================
//  CATÁLOGO
// =============================================================================

pub struct ProductCatalog {
    service: ProductService,
    products: Vec<Product>,
    pub search: String,
}

impl ProductCatalog {
    pub async fn open(service: &ProductService) -> Result<Self, AppError> {
        let mut catalog = Self {
            service: service.clone(),
            products: Vec::new(),
            search: String::new(),
        };
        catalog.refresh().await?;
        Ok(catalog)
    }

    pub async fn refresh(&mut self) -> Result<(), AppError> {
        let mut products = self.service.catalog().await?;
        products.sort_by(|a, b| a.name.cmp(&b.name));
        self.products = products;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn visible(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| {
                contains_ignore_case(&p.name, &self.search)
                    || contains_ignore_case(&p.code, &self.search)
            })
            .collect()
    }

    pub async fn toggle_status(&mut self, code: &str) -> Result<ProductStatus, AppError> {
        let current = self
            .products
            .iter()
            .find(|p| p.code == code)
            .map(|p| p.status)
            .ok_or_else(|| AppError::InvalidInput("Producto no encontrado.".to_string()))?;

        let next = current.toggled();
        self.service.set_status(code, next).await?;
        self.refresh().await?;
        Ok(next)
    }
}

// =============================================================================
//  CADASTRO
// =============================================================================

pub struct ProductForm {
    service: ProductService,
    units: Vec<UnitOfMeasure>,
    pub code: String,
    pub name: String,
    pub description: String,
    pub unit_id: Option<i64>,
}

impl ProductForm {
    pub async fn open(service: &ProductService) -> Result<Self, AppError> {
        let units = service.list_units().await?;
        Ok(Self {
            service: service.clone(),
            units,
            code: String::new(),
            name: String::new(),
            description: String::new(),
            unit_id: None,
        })
    }

    pub fn units(&self) -> &[UnitOfMeasure] {
        &self.units
    }

    pub async fn submit(&mut self) -> Result<(Alert, Route), AppError> {
        let payload = CreateProductPayload {
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            unit_id: self.unit_id,
            status: ProductStatus::Active,
        };
        self.service.create(&payload).await?;

        self.code.clear();
        self.name.clear();
        self.description.clear();
        self.unit_id = None;
        Ok((
            Alert::new("Éxito", "Producto registrado correctamente."),
            Route::Back,
        ))
    }
}

// =============================================================================
//  EDIÇÃO
// =============================================================================

pub struct ProductEditor {
    service: ProductService,
    units: Vec<UnitOfMeasure>,
    code: String,
    status: ProductStatus,
    pub name: String,
    pub description: String,
    pub unit_id: Option<i64>,
}

impl ProductEditor {
    pub async fn open(service: &ProductService, code: &str) -> Result<Self, AppError> {
        let units = service.list_units().await?;
        let product = service.find_by_code(code).await?;

        // A busca devolve o nome da unidade; o formulário precisa do id
        let unit_id = product
            .unit
            .as_deref()
            .and_then(|name| units.iter().find(|u| u.name == name))
            .map(|u| u.id);

        Ok(Self {
            service: service.clone(),
            units,
            code: product.code,
            status: product.status,
            name: product.name,
            description: product.description,
            unit_id,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn units(&self) -> &[UnitOfMeasure] {
        &self.units
    }

    pub async fn save(&self) -> Result<(Alert, Route), AppError> {
        let payload = UpdateProductPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            unit_id: self.unit_id,
        };
        self.service.update(&self.code, &payload).await?;
        Ok((
            Alert::new("Éxito", "Producto actualizado correctamente."),
            Route::Back,
        ))
    }

    pub async fn inactivate(&mut self) -> Result<Alert, AppError> {
        self.service.inactivate(&self.code).await?;
        self.status = ProductStatus::Inactive;
        Ok(Alert::new("Éxito", "Producto inactivado."))
    }
}

// =============================================================================
//  IMPORTAÇÃO
// =============================================================================

pub struct ProductImport {
    service: ProductService,
}

impl ProductImport {
    pub fn new(service: &ProductService) -> Self {
        Self {
            service: service.clone(),
        }
    }

    /// Lê a planilha do disco e envia para importação. A extensão é
    /// conferida pelo serviço.
    pub async fn import_file(&self, path: &Path) -> Result<Alert, AppError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::InvalidInput("Archivo inválido.".to_string()))?;

        let bytes = tokio::fs::read(path).await?;
        let message = self.service.import(file_name, &bytes).await?;
        Ok(Alert::new("Éxito", message))
    }

    pub async fn download_template(&self, dest: &Path) -> Result<Alert, AppError> {
        self.service.download_template(dest).await?;
        Ok(Alert::new(
            "Éxito",
            format!("Plantilla guardada en {}", dest.display()),
        ))
    }
}
