use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductId, ProductPatch};
use super::actions::{ProductAction, ProductActionResult};

impl Entity for Product {
    const NAME: &'static str = "product";

    type Id = ProductId;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Creates a new Product from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the store
    /// * `params` - Catalogue fields, including a starting buy count
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            description: params.description,
            thumb_image_url: params.thumb_image_url,
            image_url: params.image_url,
            comment_count: params.comment_count,
            buy_count: params.buy_count,
        })
    }

    fn on_create(&mut self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name required".to_string());
        }
        Ok(())
    }

    /// Updates the editable catalogue fields.
    ///
    /// Price changes never reach orders already placed; those keep their snapshot.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err("Product name required".to_string());
            }
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::IncrementBuyCount => {
                self.buy_count = self
                    .buy_count
                    .checked_add(1)
                    .ok_or_else(|| format!("Buy count overflow for product {}", self.id))?;
                Ok(ProductActionResult::BuyCount(self.buy_count))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::from_create_params(ProductId(7), ProductCreate::new("Lamp", 1000, "x.png")).unwrap()
    }

    #[test]
    fn test_increment_buy_count() {
        let mut product = product();

        assert_eq!(product.handle_action(ProductAction::IncrementBuyCount), Ok(ProductActionResult::BuyCount(1)));
        assert_eq!(product.handle_action(ProductAction::IncrementBuyCount), Ok(ProductActionResult::BuyCount(2)));
    }

    #[test]
    fn test_buy_count_never_wraps() {
        let mut product = product();
        product.buy_count = u64::MAX;

        assert!(product.handle_action(ProductAction::IncrementBuyCount).is_err());
        assert_eq!(product.buy_count, u64::MAX);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut product = Product::from_create_params(ProductId(1), ProductCreate::new(" ", 5, "")).unwrap();
        assert!(product.on_create().is_err());

        let mut product = self::product();
        let patch = ProductPatch { name: Some(String::new()), ..ProductPatch::default() };
        assert!(product.on_update(patch).is_err());
        assert_eq!(product.name, "Lamp");
    }
}
