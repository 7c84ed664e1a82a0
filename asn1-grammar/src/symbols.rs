//! Symbol table of the compiled ASN.1 grammar.
//!
//! Named symbols are the grammar rules and the aliases they are exposed under,
//! anonymous symbols the string literals of the grammar. The position of an
//! entry is its symbol id.
use asn1_descriptor::SymbolMetadata;

const fn rule(name: &'static str) -> SymbolMetadata {
    SymbolMetadata::named(name)
}

const fn literal(name: &'static str) -> SymbolMetadata {
    SymbolMetadata::anonymous(name)
}

pub static SYMBOLS: [SymbolMetadata; 522] = [
    SymbolMetadata::END,
    // Rules
    rule("source_file"),
    rule("yellcased_identifier"),
    rule("uppercased_identifier"),
    rule("lowercased_identifier"),
    rule("uppercased_field_ref"),
    rule("lowercased_field_ref"),
    rule("anycased_field_ref"),
    rule("any_identifier"),
    rule("ModuleDefinition"),
    rule("EncodingReferenceDefault"),
    rule("encodingreference"),
    rule("ModuleIdentifier"),
    rule("DefinitiveIdentification"),
    rule("DefinitiveOID"),
    rule("DefinitiveObjIdComponentList"),
    rule("DefinitiveObjIdComponent"),
    rule("NameForm"),
    rule("DefinitiveNumberForm"),
    rule("DefinitiveNameAndNumberForm"),
    rule("DefinitiveOIDandIRI"),
    rule("IRIValue"),
    rule("FirstArcIdentifier"),
    rule("modulereference"),
    rule("valuereference"),
    rule("TagDefault"),
    rule("ExtensionDefault"),
    rule("ModuleBody"),
    rule("Exports"),
    rule("SymbolsExported"),
    rule("SymbolList"),
    rule("Symbol"),
    rule("Reference"),
    rule("ParameterizedReference"),
    rule("Imports"),
    rule("SymbolsImported"),
    rule("SymbolsFromModuleList"),
    rule("SymbolsFromModule"),
    rule("SelectionOption"),
    rule("GlobalModuleReference"),
    rule("AssignedIdentifier"),
    rule("ObjectIdentifierValue"),
    rule("ObjIdComponentsList"),
    rule("ObjIdComponents"),
    rule("DefinedValue"),
    rule("ParameterizedValue"),
    rule("SimpleDefinedValue"),
    rule("ActualParameterList"),
    rule("ActualParameter"),
    rule("ExternalValueReference"),
    rule("AssignmentList"),
    rule("Assignment"),
    rule("ObjectClassAssignment"),
    rule("ParameterList"),
    rule("Parameter"),
    rule("ParamGovernor"),
    rule("Governor"),
    rule("ObjectClass"),
    rule("DefinedObjectClass"),
    rule("UsefulObjectClassReference"),
    rule("ParameterizedObjectClass"),
    rule("ExternalObjectClassReference"),
    rule("ObjectClassDefn"),
    rule("FieldSpec"),
    rule("TypeFieldSpec"),
    rule("FixedTypeValueFieldSpec"),
    rule("VariableTypeValueFieldSpec"),
    rule("FixedTypeValueSetFieldSpec"),
    rule("VariableTypeValueSetFieldSpec"),
    rule("ObjectFieldSpec"),
    rule("ObjectSetFieldSpec"),
    rule("TypeOptionalitySpec"),
    rule("ValueOptionalitySpec"),
    rule("ValueSetOptionalitySpec"),
    rule("ObjectOptionalitySpec"),
    rule("ObjectSetOptionalitySpec"),
    rule("FieldName"),
    rule("WithSyntaxSpec"),
    rule("SyntaxList"),
    rule("TokenOrGroupSpec"),
    rule("RequiredToken"),
    rule("Literal"),
    rule("OptionalGroup"),
    rule("TypeAssignment"),
    rule("ValueSetTypeAssignment"),
    rule("ObjectSetAssignment"),
    rule("ObjectAssignment"),
    rule("ValueAssignment"),
    rule("XMLValueAssignment"),
    rule("EncodingControlSections"),
    rule("EncodingControlSection"),
    rule("EncodingInstructionAssignmentList"),
    rule("Value"),
    rule("ReferencedValue"),
    rule("BuiltinValue"),
    rule("BooleanValue"),
    rule("IntegerValue"),
    rule("SignedNumber"),
    rule("number"),
    rule("EnumeratedValue"),
    rule("RealValue"),
    rule("NumericRealValue"),
    rule("realnumber"),
    rule("SpecialRealValue"),
    rule("BitStringValue"),
    rule("bstring"),
    rule("hstring"),
    rule("IdentifierList"),
    rule("OctetStringValue"),
    rule("NullValue"),
    rule("SequenceValue"),
    rule("ComponentValueList"),
    rule("NamedValue"),
    rule("SequenceOfValue"),
    rule("ValueList"),
    rule("NamedValueList"),
    rule("SetValue"),
    rule("SetOfValue"),
    rule("ChoiceValue"),
    rule("SelectionType"),
    rule("PrefixedValue"),
    rule("ObjectClassFieldValue"),
    rule("OpenTypeFieldVal"),
    rule("FixedTypeFieldVal"),
    rule("ValueFromObject"),
    rule("ReferencedObjects"),
    rule("DefinedObject"),
    rule("ExternalObjectReference"),
    rule("objectreference"),
    rule("ParameterizedObject"),
    rule("DefinedObjectSet"),
    rule("ExternalObjectSetReference"),
    rule("objectsetreference"),
    rule("ParameterizedObjectSet"),
    rule("RelativeOIDValue"),
    rule("RelativeOIDComponentsList"),
    rule("RelativeOIDComponents"),
    rule("NumberForm"),
    rule("NameAndNumberForm"),
    rule("RelativeIRIValue"),
    rule("FirstRelativeArcIdentifier"),
    rule("ArcIdentifier"),
    rule("SubsequentArcIdentifier"),
    rule("EmbeddedPDVValue"),
    rule("ExternalValue"),
    rule("TimeValue"),
    rule("tstring"),
    rule("CharacterStringValue"),
    rule("RestrictedCharacterStringValue"),
    rule("cstring"),
    rule("CharacterStringList"),
    rule("CharSyms"),
    rule("CharsDefn"),
    rule("Quadruple"),
    rule("Group"),
    rule("Plane"),
    rule("Row"),
    rule("Cell"),
    rule("Tuple"),
    rule("TableColumn"),
    rule("TableRow"),
    rule("UnrestrictedCharacterStringValue"),
    rule("InstanceOfValue"),
    rule("Type"),
    rule("BuiltinType"),
    rule("BooleanType"),
    rule("IntegerType"),
    rule("NamedNumberList"),
    rule("NamedNumber"),
    rule("EnumeratedType"),
    rule("Enumerations"),
    rule("RootEnumeration"),
    rule("AdditionalEnumeration"),
    rule("Enumeration"),
    rule("EnumerationItem"),
    rule("RealType"),
    rule("BitStringType"),
    rule("NamedBitList"),
    rule("NamedBit"),
    rule("OctetStringType"),
    rule("NullType"),
    rule("SequenceType"),
    rule("ExtensionAndException"),
    rule("OptionalExtensionMarker"),
    rule("ComponentTypeLists"),
    rule("RootComponentTypeList"),
    rule("ExtensionEndMarker"),
    rule("ExtensionAdditions"),
    rule("ExtensionAdditionList"),
    rule("ExtensionAddition"),
    rule("ExtensionAdditionGroup"),
    rule("VersionNumber"),
    rule("ComponentTypeList"),
    rule("ComponentType"),
    rule("NamedType"),
    rule("SequenceOfType"),
    rule("SetType"),
    rule("SetOfType"),
    rule("ChoiceType"),
    rule("AlternativeTypeLists"),
    rule("RootAlternativeTypeList"),
    rule("ExtensionAdditionAlternatives"),
    rule("ExtensionAdditionAlternativesList"),
    rule("ExtensionAdditionAlternative"),
    rule("ExtensionAdditionAlternativesGroup"),
    rule("AlternativeTypeList"),
    rule("ObjectIdentifierType"),
    rule("RelativeOIDType"),
    rule("IRIType"),
    rule("RelativeIRIType"),
    rule("EmbeddedPDVType"),
    rule("ExternalType"),
    rule("TimeType"),
    rule("DateType"),
    rule("TimeOfDayType"),
    rule("DateTimeType"),
    rule("DurationType"),
    rule("CharacterStringType"),
    rule("RestrictedCharacterStringType"),
    rule("UnrestrictedCharacterStringType"),
    rule("PrefixedType"),
    rule("TaggedType"),
    rule("Tag"),
    rule("ClassNumber"),
    rule("Class"),
    rule("EncodingPrefixedType"),
    rule("EncodingPrefix"),
    rule("EncodingInstruction"),
    rule("ObjectClassFieldType"),
    rule("InstanceOfType"),
    rule("ValueSet"),
    rule("ElementSetSpecs"),
    rule("RootElementSetSpec"),
    rule("AdditionalElementSetSpec"),
    rule("ElementSetSpec"),
    rule("Unions"),
    rule("UElems"),
    rule("Intersections"),
    rule("IElems"),
    rule("IntersectionElements"),
    rule("Elems"),
    rule("Exclusions"),
    rule("UnionMark"),
    rule("IntersectionMark"),
    rule("Elements"),
    rule("SubtypeElements"),
    rule("SingleValue"),
    rule("ContainedSubtype"),
    rule("ValueRange"),
    rule("LowerEndpoint"),
    rule("UpperEndpoint"),
    rule("LowerEndValue"),
    rule("UpperEndValue"),
    rule("ObjectSetElements"),
    rule("ObjectSetFromObjects"),
    rule("Object"),
    rule("ObjectDefn"),
    rule("DefaultSyntax"),
    rule("DefinedSyntax"),
    rule("DefinedSyntaxToken"),
    rule("FieldSetting"),
    rule("Setting"),
    rule("ObjectSet"),
    rule("ObjectSetSpec"),
    rule("ObjectFromObject"),
    rule("TypeFromObject"),
    rule("PermittedAlphabet"),
    rule("SizeConstraint"),
    rule("TypeConstraint"),
    rule("InnerTypeConstraints"),
    rule("SingleTypeConstraint"),
    rule("MultipleTypeConstraints"),
    rule("FullSpecification"),
    rule("PartialSpecification"),
    rule("TypeConstraints"),
    rule("NamedConstraint"),
    rule("ComponentConstraint"),
    rule("ValueConstraint"),
    rule("PresenceConstraint"),
    rule("PatternConstraint"),
    rule("PropertySettings"),
    rule("DurationRange"),
    rule("TimePointRange"),
    rule("RecurrenceRange"),
    rule("ConstrainedType"),
    rule("TypeWithConstraint"),
    rule("Constraint"),
    rule("ConstraintSpec"),
    rule("SubtypeConstraint"),
    rule("ExceptionSpec"),
    rule("ExceptionIdentification"),
    rule("GeneralConstraint"),
    rule("UserDefinedConstraint"),
    rule("UserDefinedConstraintParameter"),
    rule("TableConstraint"),
    rule("SimpleTableConstraint"),
    rule("ComponentRelationConstraint"),
    rule("AtNotation"),
    rule("Level"),
    rule("ComponentIdList"),
    rule("ContentsConstraint"),
    rule("block_comment"),
    rule("line_comment"),
    rule("keyword"),
    rule("identifier"),
    rule("XMLTypedValue"),
    rule("NonParameterizedTypeName"),
    rule("xmlasn1typename"),
    rule("XMLValue"),
    rule("XMLBuiltinValue"),
    rule("XMLBooleanValue"),
    rule("EmptyElementBoolean"),
    rule("TextBoolean"),
    rule("XMLIntegerValue"),
    rule("XMLSignedNumber"),
    rule("EmptyElementInteger"),
    rule("TextInteger"),
    rule("XMLEnumeratedValue"),
    rule("EmptyElementEnumerated"),
    rule("TextEnumerated"),
    rule("XMLRealValue"),
    rule("XMLNumericRealValue"),
    rule("XMLSpecialRealValue"),
    rule("EmptyElementReal"),
    rule("TextReal"),
    rule("XMLBitStringValue"),
    rule("xmlbstring"),
    rule("XMLIdentifierList"),
    rule("EmptyElementList"),
    rule("TextList"),
    rule("XMLOctetStringValue"),
    rule("xmlhstring"),
    rule("XMLNullValue"),
    rule("XMLSequenceValue"),
    rule("XMLComponentValueList"),
    rule("XMLNamedValue"),
    rule("XMLSequenceOfValue"),
    rule("XMLValueList"),
    rule("XMLValueOrEmpty"),
    rule("XMLDelimitedItemList"),
    rule("XMLDelimitedItem"),
    rule("XMLSetValue"),
    rule("XMLSetOfValue"),
    rule("XMLChoiceValue"),
    rule("XMLPrefixedValue"),
    rule("XMLObjectClassFieldValue"),
    rule("XMLOpenTypeFieldVal"),
    rule("XMLFixedTypeFieldVal"),
    rule("XMLObjectIdentifierValue"),
    rule("XMLObjIdComponentList"),
    rule("XMLObjIdComponent"),
    rule("XMLNumberForm"),
    rule("XMLNameAndNumberForm"),
    rule("XMLRelativeOIDValue"),
    rule("XMLRelativeOIDComponentList"),
    rule("XMLRelativeOIDComponent"),
    rule("XMLIRIValue"),
    rule("XMLRelativeIRIValue"),
    rule("XMLEmbeddedPDVValue"),
    rule("XMLExternalValue"),
    rule("XMLTimeValue"),
    rule("xmltstring"),
    rule("XMLCharacterStringValue"),
    rule("XMLRestrictedCharacterStringValue"),
    rule("xmlcstring"),
    rule("XMLUnrestrictedCharacterStringValue"),
    rule("XMLInstanceOfValue"),
    rule("ReferencedType"),
    rule("DefinedType"),
    rule("ParameterizedType"),
    rule("SimpleDefinedType"),
    rule("ExternalTypeReference"),
    rule("ParameterizedValueSetType"),
    rule("UsefulType"),
    rule("ValueSetFromObjects"),
    rule("DummyReference"),
    // Aliases
    rule("DummyGovernor"),
    rule("PrimitiveFieldName"),
    rule("objectclassreference"),
    rule("objectfieldreference"),
    rule("objectsetfieldreference"),
    rule("typefieldreference"),
    rule("typereference"),
    rule("valuefieldreference"),
    rule("valuesetfieldreference"),
    rule("word"),
    // Words
    literal("ABSENT"),
    literal("ABSTRACT-SYNTAX"),
    literal("ALL"),
    literal("APPLICATION"),
    literal("AUTOMATIC"),
    literal("BEGIN"),
    literal("BIT"),
    literal("BMPString"),
    literal("BOOLEAN"),
    literal("BY"),
    literal("CHARACTER"),
    literal("CHOICE"),
    literal("CLASS"),
    literal("COMPONENT"),
    literal("COMPONENTS"),
    literal("CONSTRAINED"),
    literal("CONTAINING"),
    literal("DATE"),
    literal("DATE-TIME"),
    literal("DEFAULT"),
    literal("DEFINITIONS"),
    literal("DESCENDANTS"),
    literal("DURATION"),
    literal("EMBEDDED"),
    literal("ENCODED"),
    literal("ENCODING-CONTROL"),
    literal("END"),
    literal("ENUMERATED"),
    literal("EXCEPT"),
    literal("EXPLICIT"),
    literal("EXPORTS"),
    literal("EXTENSIBILITY"),
    literal("EXTERNAL"),
    literal("FALSE"),
    literal("false"),
    literal("FROM"),
    literal("GeneralizedTime"),
    literal("GeneralString"),
    literal("GraphicString"),
    literal("IA5String"),
    literal("IDENTIFIER"),
    literal("IMPLICIT"),
    literal("IMPLIED"),
    literal("IMPORTS"),
    literal("INCLUDES"),
    literal("INF"),
    literal("INSTANCE"),
    literal("INSTRUCTIONS"),
    literal("INTEGER"),
    literal("INTERSECTION"),
    literal("ISO646String"),
    literal("MAX"),
    literal("MIN"),
    literal("MINUS-INFINITY"),
    literal("NaN"),
    literal("NOT-A-NUMBER"),
    literal("NULL"),
    literal("NumericString"),
    literal("OBJECT"),
    literal("ObjectDescriptor"),
    literal("OCTET"),
    literal("OF"),
    literal("OID-IRI"),
    literal("OPTIONAL"),
    literal("PATTERN"),
    literal("PDV"),
    literal("PLUS-INFINITY"),
    literal("PRESENT"),
    literal("PrintableString"),
    literal("PRIVATE"),
    literal("REAL"),
    literal("RELATIVE-OID"),
    literal("RELATIVE-OID-IRI"),
    literal("SEQUENCE"),
    literal("SET"),
    literal("SETTINGS"),
    literal("SIZE"),
    literal("STRING"),
    literal("SUCCESSORS"),
    literal("SYNTAX"),
    literal("T61String"),
    literal("TAGS"),
    literal("TeletexString"),
    literal("TIME"),
    literal("TIME-OF-DAY"),
    literal("TRUE"),
    literal("true"),
    literal("TYPE-IDENTIFIER"),
    literal("UNION"),
    literal("UNIQUE"),
    literal("UNIVERSAL"),
    literal("UniversalString"),
    literal("UTCTime"),
    literal("UTF8String"),
    literal("VideotexString"),
    literal("VisibleString"),
    literal("WITH"),
    // Punctuation
    literal("!"),
    literal("\""),
    literal("$$$$$BLING_BLING_MISTER_MONEY_BAG$$$$$"),
    literal("("),
    literal(")"),
    literal("*"),
    literal("*/"),
    literal(","),
    literal("-"),
    literal("--"),
    literal("."),
    literal(".."),
    literal("..."),
    literal("/"),
    literal("/*"),
    literal("/>"),
    literal("0"),
    literal(":"),
    literal("::="),
    literal(";"),
    literal("<"),
    literal("</"),
    literal("<MINUS-INFINITY/>"),
    literal("<NOT-A-NUMBER/>"),
    literal("<PLUS-INFINITY/>"),
    literal("<false/>"),
    literal("<true/>"),
    literal(">"),
    literal("@"),
    literal("@."),
    literal("["),
    literal("[["),
    literal("]"),
    literal("]]"),
    literal("^"),
    literal("{"),
    literal("{}"),
    literal("|"),
    literal("}"),
];
