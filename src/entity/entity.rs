use super::*;

/// Where an entity is and which way it is facing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vector2<f32>,
    pub direction: Angle,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector2::zero(),
            direction: Angle::ZERO,
        }
    }
}

impl Transform {
    pub fn new(position: Vector2<f32>, direction: Angle) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Converts a point relative to the entity (x forward, y to the left) into world space
    pub fn transform_point(&self, local: Vector2<f32>) -> Vector2<f32> {
        let (sin, cos) = self.direction.to_radians().sin_cos();
        self.position + Vector2::new(local.x * cos - local.y * sin, local.x * sin + local.y * cos)
    }
}

/// A simulated object. Owns exactly one extension, which lives and dies with it.
pub struct Entity {
    entity_type: EntityType,
    pub transform: Transform,
    pub extension: Box<dyn Extension>,
}

impl Entity {
    pub fn new(
        registry: &TypeRegistry,
        entity_type: EntityType,
        strategy: ExtensionStrategy,
        transform: Transform,
    ) -> Result<Self, String> {
        let data = registry.data(entity_type)?;
        let mut extension = strategy.create();
        extension.set_type(data);
        Ok(Self {
            entity_type,
            transform,
            extension,
        })
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn data<'a>(&self, registry: &'a TypeRegistry) -> Result<&'a EntityData, String> {
        registry.data(self.entity_type)
    }

    /// Reshapes the extension for the new type. If the type is unknown the entity is left as it
    /// was.
    pub fn change_type(
        &mut self,
        registry: &TypeRegistry,
        entity_type: EntityType,
    ) -> Result<(), String> {
        let data = registry.data(entity_type)?;
        self.extension.set_type(data);
        debug!(
            "{:?} changed type from {:?} to {} ({:?})",
            self.transform.position, self.entity_type, data.label, entity_type
        );
        self.entity_type = entity_type;
        Ok(())
    }
}
