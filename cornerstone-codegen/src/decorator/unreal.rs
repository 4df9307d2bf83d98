//! Unreal Engine reflection macros.

use super::{Decorated, Decorator};
use crate::builder::TextBuffer;

/// Decorates declarations with `USTRUCT`/`UCLASS`/`UENUM`/`UPROPERTY`/
/// `UFUNCTION` macros and exports records through `<MODULE>_API`.
#[derive(Debug, Clone)]
pub struct UnrealDecorator {
    api_name: String,
}

impl UnrealDecorator {
    /// Create a decorator for the given module, e.g. `HelloWorld`.
    pub fn new(api_name: impl Into<String>) -> Self {
        Self {
            api_name: api_name.into(),
        }
    }

    fn category(&self) -> String {
        format!("Category = \"{}\"", self.api_name)
    }
}

impl Decorator for UnrealDecorator {
    fn write_annotations(&self, out: &mut TextBuffer, node: Decorated<'_>) {
        let line = match node {
            Decorated::Struct(_) => "USTRUCT(BlueprintType)".to_string(),
            Decorated::Class(_) => "UCLASS(BlueprintType)".to_string(),
            Decorated::Enum(_) => "UENUM(BlueprintType)".to_string(),
            Decorated::Field(_) => {
                format!("UPROPERTY(EditAnywhere, BlueprintReadWrite, {})", self.category())
            }
            Decorated::Function(_) => format!("UFUNCTION(BlueprintCallable, {})", self.category()),
        };
        out.write_line(&line);
    }

    fn write_api(&self, out: &mut TextBuffer) {
        if !self.api_name.is_empty() {
            out.write(&format!("{}_API ", self.api_name.to_uppercase()));
        }
    }

    fn write_generated_body(&self, out: &mut TextBuffer, _node: Decorated<'_>) {
        out.write_line("GENERATED_BODY()");
    }
}
