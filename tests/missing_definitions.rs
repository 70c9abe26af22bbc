//! End-to-end coverage of the reference engine: every reference use-site,
//! explicit or discriminator-implied, must resolve to a declared component.

use openapi_lint::checks::missing_definition::MissingDefinition;
use openapi_lint::{Analyzer, Check, Document, Issue};

fn analyze(text: &str) -> Vec<Issue> {
    let doc = Document::parse_str(text).expect("fixture parses");
    MissingDefinition.run(&doc)
}

#[test]
fn fully_declared_document_is_clean() {
    let issues = analyze(include_str!("fixtures/petstore_v2.yaml"));
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn dangling_schema_ref_is_reported_at_the_ref_node() {
    let issues = analyze(
        r##"
swagger: "2.0"
paths:
  /pets:
    get:
      responses:
        "200":
          schema:
            $ref: "#/definitions/Foo"
"##,
    );
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule, "MissingDefinition");
    assert_eq!(issues[0].message, "Missing schema");
    assert_eq!(issues[0].path, "/paths/~1pets/get/responses/200/schema/$ref");
}

#[test]
fn every_use_site_of_a_dangling_pointer_is_reported() {
    let issues = analyze(
        r##"
swagger: "2.0"
paths:
  /a:
    get:
      responses:
        "200": { schema: { $ref: "#/definitions/Foo" } }
  /b:
    get:
      responses:
        "200": { schema: { $ref: "#/definitions/Foo" } }
  /c:
    get:
      responses:
        "200": { schema: { $ref: "#/definitions/Foo" } }
"##,
    );
    assert_eq!(issues.len(), 3);
    let mut paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
    paths.sort_unstable();
    assert_eq!(
        paths,
        vec![
            "/paths/~1a/get/responses/200/schema/$ref",
            "/paths/~1b/get/responses/200/schema/$ref",
            "/paths/~1c/get/responses/200/schema/$ref",
        ]
    );
}

#[test]
fn v2_discriminator_reports_only_the_undeclared_enum_value() {
    let issues = analyze(
        r##"
swagger: "2.0"
definitions:
  Pet:
    discriminator: petType
    properties:
      petType:
        enum: [Dog, Cat]
  Dog:
    type: object
"##,
    );
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "Missing schema");
    assert_eq!(issues[0].path, "/definitions/Pet/discriminator");
}

#[test]
fn v3_mapping_to_undeclared_schema_is_reported() {
    let issues = analyze(
        r##"
openapi: 3.0.0
components:
  schemas:
    Pet:
      discriminator:
        propertyName: petType
        mapping:
          dog: "#/components/schemas/Dog"
"##,
    );
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "Missing schema");
    assert_eq!(issues[0].path, "/components/schemas/Pet/discriminator/mapping/dog");
}

#[test]
fn v3_mapping_to_declared_schema_is_clean() {
    let issues = analyze(
        r##"
openapi: 3.0.0
components:
  schemas:
    Pet:
      discriminator:
        propertyName: petType
        mapping:
          dog: "#/components/schemas/Dog"
    Dog:
      type: object
"##,
    );
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn component_sections_are_isolated() {
    // X exists as a parameter, not as a schema
    let issues = analyze(
        r##"
openapi: 3.0.0
paths:
  /pets:
    get:
      responses:
        "200":
          content:
            application/json:
              schema:
                $ref: "#/components/schemas/X"
components:
  parameters:
    X:
      name: x
      in: query
"##,
    );
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "Missing schema");
}

#[test]
fn declaration_order_does_not_matter() {
    // use-site appears before the declaring section in the document
    let issues = analyze(
        r##"
swagger: "2.0"
paths:
  /pets:
    get:
      responses:
        "200": { schema: { $ref: "#/definitions/Pet" } }
definitions:
  Pet:
    type: object
"##,
    );
    assert!(issues.is_empty());
}

#[test]
fn reanalysis_of_the_same_document_is_identical() {
    let doc = Document::parse_str(include_str!("fixtures/dirty_v3.yaml")).unwrap();
    let analyzer = Analyzer::with_checks(vec![Box::new(MissingDefinition)]);
    let first = analyzer.analyze(&doc);
    let second = analyzer.analyze(&doc);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn malformed_refs_do_not_abort_the_pass() {
    let issues = analyze(
        r##"
swagger: "2.0"
paths:
  /pets:
    get:
      responses:
        "200": { schema: { $ref: "definitions/NoHash" } }
        "404": { schema: { $ref: 42 } }
        "500": { schema: { $ref: "#/definitions/Real" } }
"##,
    );
    // only the well-formed dangling ref is reported
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].path, "/paths/~1pets/get/responses/500/schema/$ref");
}

#[test]
fn v3_checks_all_eight_sections() {
    let issues = analyze(
        r##"
openapi: 3.0.0
paths:
  /x:
    get:
      responses:
        "200":
          $ref: "#/components/responses/R"
      parameters:
        - $ref: "#/components/parameters/P"
a: { $ref: "#/components/schemas/S" }
b: { $ref: "#/components/examples/E" }
c: { $ref: "#/components/requestBodies/B" }
d: { $ref: "#/components/headers/H" }
e: { $ref: "#/components/links/L" }
f: { $ref: "#/components/callbacks/C" }
"##,
    );
    let mut messages: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
    messages.sort_unstable();
    assert_eq!(
        messages,
        vec![
            "Missing callback",
            "Missing example",
            "Missing header",
            "Missing link",
            "Missing parameter",
            "Missing request body",
            "Missing response",
            "Missing schema",
        ]
    );
}
